//! Day 3: Variables, mutability, and data types.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Variables;

/// Name of a value's type, shortened to the last path segment.
pub fn type_name_of<T>(_: &T) -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[async_trait]
impl Lesson for Variables {
    fn day(&self) -> u8 {
        3
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Bindings are immutable unless marked mut.
        let name = "Alice";
        let age = 25;
        println!("{name} {age}");

        let mut count = 0;
        count += 1;
        println!("count is now {count}");

        // The everyday types.
        let height = 5.6;
        let is_student = true;
        let initial = 'A';
        println!("Name: {name} (type: {})", type_name_of(&name));
        println!("Age: {age} (type: {})", type_name_of(&age));
        println!("Height: {height} (type: {})", type_name_of(&height));
        println!("Is student: {is_student} (type: {})", type_name_of(&is_student));
        println!("Initial: {initial} (type: {})", type_name_of(&initial));

        // Shadowing rebinds the name, even to a new type.
        let spaces = "   ";
        let spaces = spaces.len();
        println!("spaces is now the number {spaces}");

        // Conversions are explicit.
        let small: u8 = 200;
        let bigger = small as u32 + 100;
        println!("{small} as u32 + 100 = {bigger}");

        let parsed: i32 = "42".parse().unwrap_or(0);
        println!("parsed \"42\" into {parsed}");

        // Integer sizes and their ranges.
        println!("i8 range: {} to {}", i8::MIN, i8::MAX);
        println!("u8 range: {} to {}", u8::MIN, u8::MAX);
        println!("i64 max: {}", i64::MAX);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_are_short() {
        assert_eq!(type_name_of(&5_i32), "i32");
        assert_eq!(type_name_of(&"hi"), "&str");
        assert_eq!(type_name_of(&String::new()), "String");
    }
}
