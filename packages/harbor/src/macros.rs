/// Guard an invariant inside a function returning `HarborResult`.
///
/// Logs a diagnostic and evaluates to `Err($err)` when the assertion fails,
/// so callers can short-circuit with `?` before any state is written.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {{
        if $assert {
            Ok(())
        } else {
            soroban_sdk::log!($env, "Validation failed at {}:{}", file!(), line!());
            Err($err)
        }
    }};
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {{
        if $assert {
            Ok(())
        } else {
            soroban_sdk::log!($env, $($arg)+);
            Err($err)
        }
    }};
}
