//! Scenario tests for the `MonadError` capability and its combinators.
//!
//! The same generic programs are run against the Option and Result backends.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use effect_caps::control::Outcome;
use effect_caps::effect::{ErrorCombinators, MonadError};
use effect_caps::typeclass::{OptionBrand, ResultBrand};
use rstest::rstest;

fn inverse<M: MonadError<String>>(x: f64) -> M::WithType<f64> {
    if x == 0.0 {
        M::throw_error("cannot divide by zero".to_string())
    } else {
        M::pure(1.0 / x)
    }
}

// =============================================================================
// Scenario: inverse over each backend
// =============================================================================

#[rstest]
fn inverse_over_option_discards_error() {
    assert_eq!(inverse::<OptionBrand<String>>(2.0), Some(0.5));
    assert_eq!(inverse::<OptionBrand<String>>(0.0), None);
}

#[rstest]
fn inverse_over_result_keeps_error() {
    assert_eq!(inverse::<ResultBrand<String>>(2.0), Ok(0.5));
    assert_eq!(
        inverse::<ResultBrand<String>>(0.0),
        Err("cannot divide by zero".to_string())
    );
}

// =============================================================================
// Scenario: catch_just selects by error
// =============================================================================

fn handle_only_a<M: ErrorCombinators<String>>(computation: M::WithType<i32>) -> M::WithType<i32> {
    M::catch_just(
        |error: &String| (error == "a").then_some(()),
        computation,
        |()| M::pure(2),
    )
}

#[rstest]
#[case("a", Ok(2))]
#[case("b", Err("b".to_string()))]
fn catch_just_over_result(#[case] error: &str, #[case] expected: Result<i32, String>) {
    let failing = ResultBrand::<String>::throw_error(error.to_string());
    assert_eq!(handle_only_a::<ResultBrand<String>>(failing), expected);
}

#[rstest]
fn catch_just_passes_success_through() {
    assert_eq!(handle_only_a::<ResultBrand<String>>(Ok(7)), Ok(7));
}

#[rstest]
fn catch_just_over_option_sees_default_error() {
    // Option keeps no error, so the predicate is shown String::default().
    let seen = Rc::new(RefCell::new(None));
    let recorder = Rc::clone(&seen);
    let result = OptionBrand::<String>::catch_just(
        move |error: &String| {
            *recorder.borrow_mut() = Some(error.clone());
            None::<()>
        },
        None::<i32>,
        |()| Some(0),
    );
    assert_eq!(result, None);
    assert_eq!(*seen.borrow(), Some(String::new()));
}

// =============================================================================
// Scenario: try_catch
// =============================================================================

#[rstest]
fn try_catch_over_option() {
    assert_eq!(
        OptionBrand::<String>::try_catch(inverse::<OptionBrand<String>>(0.0)),
        Some(Outcome::Failure(String::new()))
    );
    assert_eq!(
        OptionBrand::<String>::try_catch(inverse::<OptionBrand<String>>(4.0)),
        Some(Outcome::Success(0.25))
    );
}

#[rstest]
fn try_catch_over_result() {
    let outcome = ResultBrand::<String>::try_catch(inverse::<ResultBrand<String>>(0.0));
    assert_eq!(
        outcome,
        Ok(Outcome::Failure("cannot divide by zero".to_string()))
    );
}

// =============================================================================
// Scenario: with_resource over the optional-value backend
// =============================================================================

fn release_counting(counter: &Rc<Cell<u32>>) -> impl FnOnce(i32) -> Option<()> + 'static {
    let counter = Rc::clone(counter);
    move |_| {
        counter.set(counter.get() + 1);
        Some(())
    }
}

#[rstest]
fn with_resource_identity_program() {
    let counter = Rc::new(Cell::new(0));
    let result = OptionBrand::<()>::with_resource(Some(1), release_counting(&counter), Some);
    assert_eq!(result, Some(1));
    assert_eq!(counter.get(), 1);
}

#[rstest]
fn with_resource_absent_program_still_releases() {
    let counter = Rc::new(Cell::new(0));
    let result =
        OptionBrand::<()>::with_resource(Some(1), release_counting(&counter), |_| None::<i32>);
    assert_eq!(result, None);
    assert_eq!(counter.get(), 1);
}

// =============================================================================
// with_resource failure policy
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum FileError {
    Open,
    Read,
    Close,
}

impl fmt::Display for FileError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(formatter, "could not open file"),
            Self::Read => write!(formatter, "could not read file"),
            Self::Close => write!(formatter, "could not close file"),
        }
    }
}

impl std::error::Error for FileError {}

type Files = ResultBrand<FileError>;

fn read_file(
    open: Result<&'static str, FileError>,
    read: Result<usize, FileError>,
    close: Result<(), FileError>,
    log: &Rc<RefCell<Vec<String>>>,
) -> Result<usize, FileError> {
    let (release_log, program_log) = (Rc::clone(log), Rc::clone(log));
    Files::with_resource(
        open,
        move |name| {
            release_log.borrow_mut().push(format!("close {name}"));
            close
        },
        move |name| {
            program_log.borrow_mut().push(format!("read {name}"));
            read
        },
    )
}

#[rstest]
#[case::all_succeed(Ok(10), Ok(()), Ok(10))]
#[case::program_fails(Err(FileError::Read), Ok(()), Err(FileError::Read))]
#[case::release_fails(Ok(10), Err(FileError::Close), Err(FileError::Close))]
#[case::both_fail(Err(FileError::Read), Err(FileError::Close), Err(FileError::Close))]
fn with_resource_failure_precedence(
    #[case] read: Result<usize, FileError>,
    #[case] close: Result<(), FileError>,
    #[case] expected: Result<usize, FileError>,
) {
    let log = Rc::new(RefCell::new(Vec::new()));
    assert_eq!(read_file(Ok("a.txt"), read, close, &log), expected);
    assert_eq!(*log.borrow(), vec!["read a.txt", "close a.txt"]);
}

#[rstest]
fn with_resource_failed_open_touches_nothing() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let result = read_file(Err(FileError::Open), Ok(1), Ok(()), &log);
    assert_eq!(result, Err(FileError::Open));
    assert!(log.borrow().is_empty());
    assert_eq!(FileError::Open.to_string(), "could not open file");
}

// =============================================================================
// Derived helpers through generic code
// =============================================================================

fn parse_port<M: ErrorCombinators<String>>(text: &str) -> M::WithType<u16> {
    let parsed = M::from_result(text.parse::<u16>().map_err(|error| error.to_string()));
    let checked = M::ensure(parsed, || "port 0 is reserved".to_string(), |port| *port != 0);
    M::adapt_error(checked, |error| format!("invalid port: {error}"))
}

#[rstest]
#[case("8080", Ok(8080))]
#[case("0", Err("invalid port: port 0 is reserved".to_string()))]
#[case("abc", Err("invalid port: invalid digit found in string".to_string()))]
fn parse_port_over_result(#[case] text: &str, #[case] expected: Result<u16, String>) {
    assert_eq!(parse_port::<ResultBrand<String>>(text), expected);
}

#[rstest]
fn parse_port_over_option() {
    assert_eq!(parse_port::<OptionBrand<String>>("443"), Some(443));
    assert_eq!(parse_port::<OptionBrand<String>>("0"), None);
}

#[rstest]
fn handle_error_and_redeem_always_succeed() {
    let recovered = ResultBrand::<String>::handle_error(parse_port::<ResultBrand<String>>("x"), |_| 80);
    assert_eq!(recovered, Ok(80));

    let described = ResultBrand::<String>::redeem(
        parse_port::<ResultBrand<String>>("22"),
        |error| error,
        |port| format!("port {port}"),
    );
    assert_eq!(described, Ok("port 22".to_string()));
}
