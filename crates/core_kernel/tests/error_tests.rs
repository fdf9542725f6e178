//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::money::MoneyError;
use core_kernel::ports::PortError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    match error {
        CoreError::Validation(msg) => assert_eq!(msg, "Invalid input"),
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_error_not_found() {
    let error = CoreError::not_found("Agreement not found");

    match error {
        CoreError::NotFound(msg) => assert_eq!(msg, "Agreement not found"),
        _ => panic!("Expected NotFound error"),
    }
}

#[test]
fn test_core_error_from_money_error() {
    let money_error = MoneyError::CurrencyMismatch("CHF".to_string(), "EUR".to_string());
    let core_error: CoreError = money_error.into();

    assert!(core_error.to_string().contains("Currency mismatch"));
}

#[test]
fn test_port_error_not_found_classification() {
    let error = PortError::not_found("Hotel", "HTL-123");
    assert!(error.is_not_found());
    assert!(!error.is_transient());
}

#[test]
fn test_port_error_connection_is_transient() {
    let error = PortError::connection("pool exhausted");
    assert!(error.is_transient());
    assert!(!error.is_not_found());
}
