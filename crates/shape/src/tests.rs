#![cfg(feature = "alloc")]

use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use super::error::ErrorKind;
use super::{Dimension, Error, Field, Rectangle, Type, Value};

#[inline]
fn expected(field: Field, actual: Type) -> ErrorKind {
    ErrorKind::Expected {
        field,
        expected: Type::INT,
        actual,
    }
}

#[inline]
fn not_positive(field: Field, value: i128) -> ErrorKind {
    ErrorKind::NotPositive { field, value }
}

fn pairs(rect: &Rectangle) -> Vec<(&'static str, u64)> {
    rect.dimensions().map(|d| d.as_pair()).collect()
}

#[test]
fn iterate_in_order() -> Result<(), Error> {
    let rect = Rectangle::new(5, 3)?;
    assert_eq!(pairs(&rect), [("length", 5), ("width", 3)]);

    let items = rect.into_iter().map(|d| d.to_string()).collect::<Vec<_>>();
    assert_eq!(items, ["{'length': 5}", "{'width': 3}"]);
    Ok(())
}

#[test]
fn iterate_many_sizes() -> Result<(), Error> {
    let mut sizes = Vec::new();

    for shift in 0..63 {
        let n = 1i64 << shift;
        sizes.extend([(n, 1), (1, n), (n, n), (n - 1 + n, n)]);
    }

    sizes.extend([
        (1, i64::MAX),
        (i64::MAX, 1),
        (i64::MAX, i64::MAX),
        (i64::MAX - 1, 2),
    ]);

    for (l, w) in sizes {
        let rect = Rectangle::new(l, w)?;
        assert_eq!(pairs(&rect), [("length", l as u64), ("width", w as u64)]);
        assert_eq!(rect.length(), l as u64);
        assert_eq!(rect.width(), w as u64);
    }

    Ok(())
}

#[test]
fn unsigned_full_range() -> Result<(), Error> {
    for (l, w) in [(1, u64::MAX), (u64::MAX, 1), (u64::MAX, u64::MAX), (1 << 63, 3)] {
        let rect = Rectangle::from_u64(l, w)?;
        assert_eq!(pairs(&rect), [("length", l), ("width", w)]);
        assert_eq!(Rectangle::from_values(l.into(), w.into())?, rect);
    }

    let e = Rectangle::from_u64(0, 3).unwrap_err();
    assert_eq!(e.kind(), not_positive(Field::Length, 0));

    let e = Rectangle::from_u64(5, 0).unwrap_err();
    assert_eq!(e.kind(), not_positive(Field::Width, 0));
    Ok(())
}

#[test]
fn reject_out_of_range() {
    let too_large = i128::from(u64::MAX) + 1;

    let e = Rectangle::from_values(Value::Int(too_large), Value::Int(3)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfRange { field: Field::Length });
    assert!(e.is_value());
    assert!(!e.is_type());

    let huge = "123456789012345678901234567890123456789012";
    let e = Rectangle::from_values(Value::Int(5), Value::BigInt(huge)).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::OutOfRange { field: Field::Width });
    assert_eq!(
        e.to_string(),
        "Expected width to be in 1..=18446744073709551615"
    );

    let e = Rectangle::from_values(Value::Int(-5), Value::Int(3)).unwrap_err();
    assert_eq!(e.kind(), not_positive(Field::Length, -5));
}

#[test]
fn big_integers_are_integers() {
    let huge = "-123456789012345678901234567890123456789012";

    // Type errors still come first, a big integer is not one.
    let e = Rectangle::from_values(Value::BigInt(huge), Value::Float(3.0)).unwrap_err();
    assert_eq!(e.kind(), expected(Field::Width, Type::FLOAT));

    let e = Rectangle::from_values(Value::BigInt(huge), Value::Int(3)).unwrap_err();
    assert!(e.is_value());
    assert_eq!(Value::BigInt(huge).ty(), Type::INT);
    assert_eq!(Value::BigInt(huge).to_string(), huge);
}

#[test]
fn iteration_restarts() -> Result<(), Error> {
    let rect = Rectangle::new(5, 3)?;

    let mut it = rect.dimensions();
    assert_eq!(it.next().map(|d| d.field()), Some(Field::Length));

    // A second traversal does not share the cursor of the first.
    assert_eq!(pairs(&rect), [("length", 5), ("width", 3)]);
    assert_eq!(it.next().map(|d| d.field()), Some(Field::Width));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);

    let first = (&rect).into_iter().collect::<Vec<Dimension>>();
    let second = (&rect).into_iter().collect::<Vec<Dimension>>();
    assert_eq!(first, second);
    assert_eq!(rect, Rectangle::new(5, 3)?);
    Ok(())
}

#[test]
fn iterator_is_exact() -> Result<(), Error> {
    let rect = Rectangle::new(5, 3)?;
    let mut it = rect.dimensions();

    assert_eq!(it.len(), 2);
    it.next();
    assert_eq!(it.len(), 1);

    let mut copy = it.clone();
    assert_eq!(copy.next().map(|d| d.value()), Some(3));
    assert_eq!(it.len(), 1);

    assert_eq!(
        rect.dimensions().rev().map(|d| d.key()).collect::<Vec<_>>(),
        ["width", "length"]
    );
    Ok(())
}

#[test]
fn dimension_as_map() -> Result<(), Error> {
    let rect = Rectangle::new(5, 3)?;
    let maps = rect.dimensions().map(|d| d.to_map()).collect::<Vec<_>>();

    assert_eq!(maps.len(), 2);
    assert_eq!(maps[0].len(), 1);
    assert_eq!(maps[0].get("length"), Some(&5));
    assert_eq!(maps[1].len(), 1);
    assert_eq!(maps[1].get("width"), Some(&3));
    Ok(())
}

#[test]
fn display() -> Result<(), Error> {
    assert_eq!(
        Rectangle::new(5, 3)?.to_string(),
        "Rectangle(length=5, width=3)"
    );
    assert_eq!(
        format!("{}", Rectangle::new(1, 100)?),
        "Rectangle(length=1, width=100)"
    );
    Ok(())
}

#[test]
fn reject_not_positive() {
    let e = Rectangle::new(0, 3).unwrap_err();
    assert_eq!(e.kind(), not_positive(Field::Length, 0));
    assert!(e.is_value());
    assert_eq!(e.field(), Field::Length);

    let e = Rectangle::new(5, -1).unwrap_err();
    assert_eq!(e.kind(), not_positive(Field::Width, -1));

    let e = Rectangle::new(i64::MIN, 0).unwrap_err();
    assert_eq!(e.kind(), not_positive(Field::Length, i128::from(i64::MIN)));

    assert_eq!(
        Rectangle::new(-2, 3).unwrap_err().to_string(),
        "Expected length to be positive, but found -2"
    );
}

#[test]
fn reject_wrong_type() {
    let e = Rectangle::from_values(Value::Int(5), Value::Float(3.0)).unwrap_err();
    assert_eq!(e.kind(), expected(Field::Width, Type::FLOAT));
    assert!(e.is_type());
    assert!(!e.is_value());

    let e = Rectangle::from_values(Value::Str("5"), Value::Int(3)).unwrap_err();
    assert_eq!(e.kind(), expected(Field::Length, Type::STRING));

    let e = Rectangle::from_values(Value::Bool(true), Value::Int(3)).unwrap_err();
    assert_eq!(e.kind(), expected(Field::Length, Type::BOOL));

    assert_eq!(
        e.to_string(),
        "Expected length to be Int, but found Bool"
    );
}

#[test]
fn type_checked_before_value() {
    let e = Rectangle::from_values(Value::Int(0), Value::Float(3.0)).unwrap_err();
    assert_eq!(e.kind(), expected(Field::Width, Type::FLOAT));

    let e = Rectangle::from_values(Value::Int(-4), "wide".into()).unwrap_err();
    assert_eq!(e.kind(), expected(Field::Width, Type::STRING));

    let e = Rectangle::from_values(Value::Int(0), Value::Int(3)).unwrap_err();
    assert_eq!(e.kind(), not_positive(Field::Length, 0));
}

#[test]
fn from_values_matches_new() -> Result<(), Error> {
    let a = Rectangle::from_values(5i64.into(), 3i64.into())?;
    let b = Rectangle::new(5, 3)?;
    assert_eq!(a, b);
    assert_eq!(pairs(&a), pairs(&b));
    Ok(())
}

#[test]
fn value_display() {
    assert_eq!(Value::Int(5).to_string(), "5");
    assert_eq!(Value::Float(3.0).to_string(), "3.0");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Str("five").to_string(), "\"five\"");
    assert_eq!(Type::FLOAT.to_string(), "Float");
    assert_eq!(format!("{:?}", Type::STRING), "String");
}
