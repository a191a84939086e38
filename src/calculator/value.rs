use crate::errors::{Error, Result};
use rug::ops::Pow;
use rug::{Complete, Integer};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A typed integral or real numeric value. Integral values use arbitrary
/// precision arithmetic. Operations on Values promote integers to reals only
/// when the exact result is not an integer.
#[derive(Clone)]
pub enum Value {
    Integer(Integer),
    Real(f64),
}

impl Value {
    /// Creates a new integer value from a decimal string
    pub fn new_integer(s: &str) -> Result<Value> {
        Integer::from_str_radix(s, 10)
            .map(Value::Integer)
            .map_err(|_| Error::InvalidNumber(s.to_string()))
    }

    /// Creates a new real value from a decimal string
    pub fn new_real(s: &str) -> Result<Value> {
        s.parse::<f64>()
            .map(Value::Real)
            .map_err(|_| Error::InvalidNumber(s.to_string()))
    }

    /// Creates a value from a numeric literal, which is real if it contains a
    /// decimal point
    pub fn from_literal(s: &str) -> Result<Value> {
        if s.contains('.') {
            Value::new_real(s)
        } else {
            Value::new_integer(s)
        }
    }

    /// Returns true if the value is zero
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Integer(n) => n.is_zero(),
            Value::Real(r) => *r == 0.0,
        }
    }

    /// Returns the value as a real number
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Integer(n) => n.to_f64(),
            Value::Real(r) => *r,
        }
    }

    /// Divides by another value. Integers divide to integers only when the
    /// division is exact.
    pub fn checked_div(self, other: Value) -> Result<Value> {
        if other.is_zero() {
            return Err(Error::DivideByZero);
        }

        Ok(match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => {
                let (quotient, remainder) = a.div_rem_ref(&b).complete();
                if remainder.is_zero() {
                    Value::Integer(quotient)
                } else {
                    Value::Real(a.to_f64() / b.to_f64())
                }
            }
            (a, b) => Value::Real(a.to_f64() / b.to_f64()),
        })
    }

    /// Raises the value to a power. Integer powers stay exact unless the
    /// exponent is negative or does not fit in 32 bits.
    pub fn pow(self, exponent: Value) -> Value {
        match (self, exponent) {
            (Value::Integer(base), Value::Integer(exp)) => match exp.to_u32() {
                Some(e) => Value::Integer(base.pow(e)),
                None => Value::Real(base.to_f64().powf(exp.to_f64())),
            },
            (a, b) => Value::Real(a.to_f64().powf(b.to_f64())),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Integer(Integer::from(n))
    }
}

impl fmt::Debug for Value {
    /// Formats a value for debugging
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "(Integer) {}", n),
            Value::Real(r) => write!(f, "(Real) {}", r),
        }
    }
}

impl fmt::Display for Value {
    /// Formats a value as a string
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Real(r) => write!(f, "{}", r),
        }
    }
}

impl PartialEq for Value {
    /// Tests two Values for numeric equality, regardless of type
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Integer(a), Value::Real(b)) => a == b,
            (Value::Real(a), Value::Integer(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
        }
    }
}

/// Applies an exact integer operation, or a real one when either side is real
fn arithmetic(
    a: Value,
    b: Value,
    int_op: fn(Integer, Integer) -> Integer,
    real_op: fn(f64, f64) -> f64,
) -> Value {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => Value::Integer(int_op(x, y)),
        (x, y) => Value::Real(real_op(x.to_f64(), y.to_f64())),
    }
}

/// Implements '+' operator
impl Add for Value {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        arithmetic(self, other, |x, y| x + y, |x, y| x + y)
    }
}

/// Implements binary '-' operator
impl Sub for Value {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        arithmetic(self, other, |x, y| x - y, |x, y| x - y)
    }
}

/// Implements '*' operator
impl Mul for Value {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        arithmetic(self, other, |x, y| x * y, |x, y| x * y)
    }
}

/// Implements unary '-' operator
impl Neg for Value {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Value::Integer(n) => Value::Integer(-n),
            Value::Real(r) => Value::Real(-r),
        }
    }
}
