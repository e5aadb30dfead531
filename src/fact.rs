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
 * Two ways of computing `n!`.
 *
 * `factorial` follows the textbook definition, `n! = n * (n-1)!`, and so
 * keeps one call frame alive for every factor still waiting to be multiplied
 * in. It is here to illustrate that cost, not for production use: the depth
 * of the recursion is metered, and arguments deeper than the budget fail with
 * `ErrorKind::StackExhausted` instead of overflowing the native stack.
 *
 * `tco_factorial` carries the partial product forward in an accumulator, so
 * each step multiplies before moving on and nothing is left pending. Rust does
 * not guarantee tail-call elimination, so the accumulator form is written out
 * as a loop and runs in constant stack space for any `n`.
 *
 * ```
 * # use factorial::{factorial, tco_factorial};
 * assert_eq!(factorial(5).unwrap(), tco_factorial(5).unwrap());
 * ```
 */

use num_bigint::BigUint;
use num_traits::One;

use error::FactorialError;

/// Call-depth budget used by `factorial`.
pub const DEFAULT_RECURSION_LIMIT: u64 = 1024;

/// Calculates `n!` by plain recursion, using at most `DEFAULT_RECURSION_LIMIT`
/// frames.
pub fn factorial(n: i64) -> Result<BigUint, FactorialError> {
    factorial_with_limit(n, DEFAULT_RECURSION_LIMIT)
}

/**
 * Calculates `n!` by plain recursion, failing once more than `limit` recursive
 * calls would be needed.
 *
 * A call for `n` needs `n` frames below the entry point, so this succeeds
 * exactly when `0 <= n <= limit`. Negative `n` is rejected before any
 * recursion happens.
 */
pub fn factorial_with_limit(n: i64, limit: u64) -> Result<BigUint, FactorialError> {
    if n < 0 {
        return Err(FactorialError::invalid_argument(n));
    }
    factorial_recursive(n as u64, 0, limit)
}

fn factorial_recursive(n: u64, depth: u64, limit: u64) -> Result<BigUint, FactorialError> {
    if n == 0 {
        return Ok(BigUint::one());
    }
    if depth >= limit {
        return Err(FactorialError::stack_exhausted(limit));
    }
    // The multiply waits on the inner call, so this frame stays live.
    Ok(factorial_recursive(n - 1, depth + 1, limit)? * n)
}

/// Calculates `n!` by passing an accumulator, seeded with one, down to the
/// base case.
pub fn tco_factorial(n: i64) -> Result<BigUint, FactorialError> {
    if n < 0 {
        return Err(FactorialError::invalid_argument(n));
    }
    Ok(factorial_tail_recursion(n as u64, BigUint::one()))
}

/**
 * Multiplies `acc` by `n!`.
 *
 * This is the accumulator-passing recursion
 *
 * ```text
 * f(0, acc) = acc
 * f(n, acc) = f(n - 1, acc * n)
 * ```
 *
 * with the tail call turned into a jump back to the top of the loop.
 *
 * Factors are first gathered into a single machine word and only folded into
 * the bignum accumulator once the word is full, which saves a bignum
 * multiplication for every factor that fits alongside its neighbours.
 */
pub fn factorial_tail_recursion(mut n: u64, mut acc: BigUint) -> BigUint {
    let mut limb: u64 = 1;
    while n != 0 {
        match limb.checked_mul(n) {
            Some(l) => limb = l,
            None => {
                acc *= limb;
                limb = n;
            }
        }
        n -= 1;
    }
    acc * limb
}

/**
 * Formats the report printed by the `factorial` binary: one line for each
 * variant.
 *
 * ```
 * # use factorial::fact::summary;
 * assert_eq!(summary(5).unwrap(),
 *            "Factorial of 5 = 120\nTCO Factorial of 5 = 120\n");
 * ```
 */
pub fn summary(n: i64) -> Result<String, FactorialError> {
    let result = factorial(n)?;
    let tco_result = tco_factorial(n)?;
    Ok(format!("Factorial of {} = {}\nTCO Factorial of {} = {}\n",
               n, result, n, tco_result))
}
