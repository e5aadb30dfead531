// Copyright 2015 The Factorial Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

/*!
 * Factorials in fixed-width integer types.
 *
 * Factorials outgrow every primitive integer quickly: `13!` no longer fits in
 * an `i32`, and `21!` no longer fits in a `u64`. `CheckedFactorial` reports the
 * last argument each type can hold and returns `None` past it, rather than
 * wrapping.
 *
 * ```
 * # use factorial::CheckedFactorial;
 * assert_eq!(12i32.checked_factorial(), Some(479001600));
 * assert_eq!(13i32.checked_factorial(), None);
 * assert_eq!(<u64 as CheckedFactorial>::MAX_ARG, 20);
 * ```
 */

pub trait CheckedFactorial: Sized {
    /// The largest argument whose factorial is representable in `Self`.
    const MAX_ARG: u32;

    /// Computes `self!`, or `None` if `self` is negative or the result overflows.
    fn checked_factorial(self) -> Option<Self>;
}

macro_rules! impl_checked_factorial (
    ($($t:ty => $max:expr),*) => (
        $(impl CheckedFactorial for $t {
            const MAX_ARG: u32 = $max;

            #[allow(unused_comparisons)]
            fn checked_factorial(self) -> Option<$t> {
                if self < 0 {
                    return None;
                }
                let mut acc: $t = 1;
                let mut n = self;
                while n > 1 {
                    acc = acc.checked_mul(n)?;
                    n -= 1;
                }
                Some(acc)
            }
        })*
    )
);

impl_checked_factorial!(u8 => 5, u16 => 8, u32 => 12, u64 => 20, u128 => 34);
impl_checked_factorial!(i8 => 5, i16 => 7, i32 => 12, i64 => 20, i128 => 33);
