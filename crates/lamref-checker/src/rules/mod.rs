//! Checks run by `CheckerState`.

pub mod replace_lambda_by_method_ref;

pub use replace_lambda_by_method_ref::{
    ReplaceLambdaByMethodRefCheck, forwarded_call, is_replaceable_by_method_ref,
};
