//! Day 13: Tuples and sets.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashSet};

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct TuplesAndSets;

/// Elements present in both slices, sorted and deduplicated.
pub fn common_elements(a: &[i32], b: &[i32]) -> Vec<i32> {
    let a: BTreeSet<i32> = a.iter().copied().collect();
    let b: BTreeSet<i32> = b.iter().copied().collect();
    a.intersection(&b).copied().collect()
}

#[async_trait]
impl Lesson for TuplesAndSets {
    fn day(&self) -> u8 {
        13
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Tuples group values of different types.
        let point = (3, 5, "origin offset");
        println!("point: {point:?}");
        println!("by index: {} {} {}", point.0, point.1, point.2);

        // Destructuring.
        let (x, y, label) = point;
        println!("x={x} y={y} label={label}");

        // Multiple assignment and swapping.
        let (mut a, mut b) = (1, 2);
        (a, b) = (b, a);
        println!("after swap: a={a} b={b}");

        // Functions return tuples when one value is not enough.
        let divmod = |n: i32, d: i32| (n / d, n % d);
        let (quotient, remainder) = divmod(17, 5);
        println!("17 divmod 5 = ({quotient}, {remainder})");

        // HashSet keeps each value once.
        let mut seen: HashSet<i32> = HashSet::new();
        for n in [1, 2, 2, 3, 3, 3] {
            seen.insert(n);
        }
        println!("unique count: {}", seen.len());
        println!("contains 2: {}", seen.contains(&2));

        // BTreeSet iterates in order, handy for printing.
        let evens: BTreeSet<i32> = (0..10).filter(|n| n % 2 == 0).collect();
        let fives: BTreeSet<i32> = [0, 5].into_iter().collect();
        println!("evens: {evens:?}");
        println!("union: {:?}", evens.union(&fives).collect::<Vec<_>>());
        println!(
            "difference: {:?}",
            evens.difference(&fives).collect::<Vec<_>>()
        );

        println!(
            "common elements: {:?}",
            common_elements(&[1, 2, 3, 4], &[3, 4, 5, 6])
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_is_sorted_and_deduped() {
        assert_eq!(common_elements(&[4, 3, 3, 1], &[3, 4, 4, 9]), vec![3, 4]);
        assert!(common_elements(&[1, 2], &[3, 4]).is_empty());
    }
}
