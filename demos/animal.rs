use sovran_any::{AnyError, AnyValue};

// Example trait: Animal
trait Animal {
    fn make_sound(&self) -> &str;
}

#[derive(Clone)]
struct Dog {
    name: String,
}

impl Animal for Dog {
    fn make_sound(&self) -> &str {
        "Woof!"
    }
}

#[derive(Clone)]
struct Cat {
    name: String,
}

impl Animal for Cat {
    fn make_sound(&self) -> &str {
        "Meow!"
    }
}

fn describe(pet: &AnyValue) -> Result<String, AnyError> {
    if let Ok(dog) = pet.downcast_ref::<Dog>() {
        return Ok(format!("Dog named {} says: {}", dog.name, dog.make_sound()));
    }
    let cat = pet.downcast_ref::<Cat>()?;
    Ok(format!("Cat named {} says: {}", cat.name, cat.make_sound()))
}

fn main() -> Result<(), AnyError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut pet = AnyValue::new(Dog {
        name: "Rover".to_string(),
    });
    println!("Holding: {:?}", pet);
    println!("{}", describe(&pet)?);

    // Keep a copy of the dog before replacing it
    let kennel = pet.clone();

    pet.set(Cat {
        name: "Whiskers".to_string(),
    });
    println!("{}", describe(&pet)?);

    // Attempting to access with incorrect type (intentional error)
    match pet.downcast_ref::<Dog>() {
        Ok(_) => println!("This shouldn't happen"),
        Err(AnyError::BadCast { expected, found }) => {
            println!("Correctly detected mismatch: wanted {}, found {}", expected, found)
        }
        Err(e) => println!("Unexpected error: {}", e),
    }

    // The copy is unaffected by the replacement
    println!("{}", describe(&kennel)?);

    // A value that is neither animal
    pet.set(42u8);
    match describe(&pet) {
        Ok(message) => println!("{}", message),
        Err(e) => println!("Not an animal: {}", e),
    }

    Ok(())
}
