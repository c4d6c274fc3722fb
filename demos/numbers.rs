use sovran_any::{any_cast, any_cast_mut, make_any, AnyError, AnyValue};

// Example trait: Number
trait Number {
    fn get_value(&self) -> i64;
    fn set_value(&mut self, value: i64);
}

#[derive(Clone)]
struct IntegerValue {
    value: i64,
}

impl Number for IntegerValue {
    fn get_value(&self) -> i64 {
        self.value
    }
    fn set_value(&mut self, value: i64) {
        self.value = value;
    }
}

#[derive(Clone)]
struct DoubledValue {
    value: i64,
}

impl From<i64> for DoubledValue {
    fn from(value: i64) -> Self {
        Self { value: value / 2 }
    }
}

impl Number for DoubledValue {
    fn get_value(&self) -> i64 {
        self.value * 2
    }
    fn set_value(&mut self, value: i64) {
        self.value = value / 2;
    }
}

fn main() -> Result<(), AnyError> {
    let mut num1 = AnyValue::new(IntegerValue { value: 42 });
    let mut num2 = make_any::<DoubledValue, _>(42i64); // Stored as 21, reads as 42

    match any_cast::<IntegerValue>(&num1) {
        Ok(num) => println!("Value 1: {}", num.get_value()),
        Err(e) => println!("Error reading IntegerValue: {}", e),
    }

    // Alternative pattern using ? operator for early return
    println!("Value 2: {}", any_cast::<DoubledValue>(&num2)?.get_value());

    // Update a number in place
    any_cast_mut::<IntegerValue>(&mut num1)?.set_value(100);
    println!("New value 1: {}", any_cast::<IntegerValue>(&num1)?.get_value());

    // Swap the two containers; no value is copied
    num1.swap(&mut num2);
    println!("After swap, slot 1 holds {:?}", num1.type_name());

    // Move the value out of slot 2
    match num2.remove::<IntegerValue>() {
        Ok(num) => println!("Removed value {} from slot 2", num.get_value()),
        Err(e) => println!("Error removing value: {}", e),
    }

    // Try accessing the removed value (should fail)
    match any_cast::<IntegerValue>(&num2) {
        Ok(_) => println!("This shouldn't happen - slot 2 should be empty"),
        Err(AnyError::Empty { expected }) => {
            println!("Correctly detected slot 2 is empty (asked for {})", expected)
        }
        Err(e) => println!("Unexpected error: {}", e),
    }

    println!("Slot 2 has value: {}", num2.has_value());

    Ok(())
}
