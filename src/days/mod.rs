//! One module per day of the course.
//!
//! Each module holds the runnable lesson for its day plus the helper
//! functions its exercises build. [`lesson_for`] is the registry the
//! course runner uses to find them.

pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_04;
pub mod day_05;
pub mod day_06;
pub mod day_07;
pub mod day_08;
pub mod day_09;
pub mod day_10;
pub mod day_11;
pub mod day_12;
pub mod day_13;
pub mod day_14;
pub mod day_15;
pub mod day_16;
pub mod day_17;
pub mod day_18;
pub mod day_19;
pub mod day_20;
pub mod day_21;
pub mod day_22;
pub mod day_23;
pub mod day_24;
pub mod day_25;
pub mod day_26;
pub mod day_27;
pub mod day_28;
pub mod day_29;
pub mod day_30;
pub mod day_31;
pub mod day_32;
pub mod day_33;

use crate::domain::ports::Lesson;

/// Looks up the lesson for a day number. Returns `None` for numbers
/// outside the course.
pub fn lesson_for(day: u8) -> Option<Box<dyn Lesson>> {
    let lesson: Box<dyn Lesson> = match day {
        1 => Box::new(day_01::Setup),
        2 => Box::new(day_02::Printing),
        3 => Box::new(day_03::Variables),
        4 => Box::new(day_04::InputOutput),
        5 => Box::new(day_05::Strings),
        6 => Box::new(day_06::Arithmetic),
        7 => Box::new(day_07::Conditionals),
        8 => Box::new(day_08::Operators),
        9 => Box::new(day_09::Vectors),
        10 => Box::new(day_10::ForLoops),
        11 => Box::new(day_11::WhileLoops),
        12 => Box::new(day_12::Adapters),
        13 => Box::new(day_13::TuplesAndSets),
        14 => Box::new(day_14::Maps),
        15 => Box::new(day_15::Functions),
        16 => Box::new(day_16::ArgsAndReturns),
        17 => Box::new(day_17::ScopeAndConsts),
        18 => Box::new(day_18::Errors),
        19 => Box::new(day_19::Files),
        20 => Box::new(day_20::ModulesAndUse),
        21 => Box::new(day_21::StdTour),
        22 => Box::new(day_22::OwnModules),
        23 => Box::new(day_23::StructBasics),
        24 => Box::new(day_24::MethodsAndDefaults),
        25 => Box::new(day_25::TraitBasics),
        26 => Box::new(day_26::ExternalCrates),
        27 => Box::new(day_27::JsonAndApis),
        28 => Box::new(day_28::CalculatorProject),
        29 => Box::new(day_29::TodoProject),
        30 => Box::new(day_30::WrapUp),
        31 => Box::new(day_31::Iterators),
        32 => Box::new(day_32::Closures),
        33 => Box::new(day_33::ThreadsAndTasks),
        _ => return None,
    };
    Some(lesson)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_day_of_the_course_has_a_lesson() {
        for day in 1..=33u8 {
            let lesson = lesson_for(day).unwrap_or_else(|| panic!("no lesson for day {day}"));
            assert_eq!(lesson.day(), day);
        }
    }

    #[test]
    fn out_of_range_days_have_no_lesson() {
        assert!(lesson_for(0).is_none());
        assert!(lesson_for(34).is_none());
    }
}
