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

use std::error::Error;
use std::fmt;

/// The error returned when a factorial cannot be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorialError { repr: Repr }

/// The reason a factorial computation was refused or abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The argument was negative.
    InvalidArgument,
    /// The recursion ran out of call-depth budget before reaching the base case.
    StackExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr {
    InvalidArgument(i64),
    StackExhausted(u64),
}

impl FactorialError {
    pub fn invalid_argument(n: i64) -> FactorialError {
        FactorialError { repr: Repr::InvalidArgument(n) }
    }

    pub fn stack_exhausted(limit: u64) -> FactorialError {
        FactorialError { repr: Repr::StackExhausted(limit) }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            Repr::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Repr::StackExhausted(_) => ErrorKind::StackExhausted,
        }
    }

    /// The rejected argument, if this is an `InvalidArgument` error.
    pub fn argument(&self) -> Option<i64> {
        match self.repr {
            Repr::InvalidArgument(n) => Some(n),
            _ => None,
        }
    }

    /// The depth budget that was used up, if this is a `StackExhausted` error.
    pub fn limit(&self) -> Option<u64> {
        match self.repr {
            Repr::StackExhausted(limit) => Some(limit),
            _ => None,
        }
    }
}

impl Error for FactorialError {}

impl fmt::Display for FactorialError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.repr {
            Repr::InvalidArgument(n) =>
                write!(f, "factorial is undefined for negative argument {}", n),
            Repr::StackExhausted(limit) =>
                write!(f, "recursion depth exceeded the limit of {} frames", limit),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        let cases = [
            (FactorialError::invalid_argument(-1), ErrorKind::InvalidArgument),
            (FactorialError::stack_exhausted(1024), ErrorKind::StackExhausted),
        ];

        for &(ref e, kind) in cases.iter() {
            assert_eq!(e.kind(), kind);
        }
    }

    #[test]
    fn payload() {
        let e = FactorialError::invalid_argument(-7);
        assert_eq!(e.argument(), Some(-7));
        assert_eq!(e.limit(), None);

        let e = FactorialError::stack_exhausted(64);
        assert_eq!(e.argument(), None);
        assert_eq!(e.limit(), Some(64));
    }

    #[test]
    fn display() {
        assert_eq!(FactorialError::invalid_argument(-1).to_string(),
                   "factorial is undefined for negative argument -1");
        assert_eq!(FactorialError::stack_exhausted(1024).to_string(),
                   "recursion depth exceeded the limit of 1024 frames");
    }
}
