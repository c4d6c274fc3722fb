use sovran_any::{AnyError, AnyValue};
use std::collections::HashMap;

/// A plugin setting whose type is only known to the plugin that owns it
struct Setting {
    name: &'static str,
    value: AnyValue,
    default: AnyValue,
}

impl Setting {
    fn new<T: Clone + 'static>(name: &'static str, default: T) -> Self {
        let default = AnyValue::new(default);
        Self {
            name,
            value: default.clone(),
            default,
        }
    }

    fn restore_default(&mut self) {
        self.value.clone_from(&self.default);
    }
}

fn main() -> Result<(), AnyError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut settings = vec![
        Setting::new("retries", 3u32),
        Setting::new("endpoint", String::from("https://localhost")),
        Setting::new("weights", HashMap::from([("a", 0.5f32), ("b", 0.5f32)])),
    ];

    // Each owner updates its own setting by exact type
    *settings[0].value.downcast_mut::<u32>()? = 10;
    settings[1].value.set(String::from("https://example.com"));
    settings[2]
        .value
        .downcast_mut::<HashMap<&'static str, f32>>()?
        .insert("c", 0.0);

    for setting in &settings {
        println!("{} = {:?}", setting.name, setting.value);
    }

    // Reading with the wrong type fails instead of misinterpreting the value
    if let Err(e) = settings[0].value.downcast_ref::<u64>() {
        println!("retries: {}", e);
    }

    for setting in &mut settings {
        setting.restore_default();
    }
    println!(
        "retries after restore = {}",
        settings[0].value.downcast_ref::<u32>()?
    );
    println!(
        "weights after restore = {:?}",
        settings[2]
            .value
            .downcast_ref::<HashMap<&'static str, f32>>()?
    );

    Ok(())
}
