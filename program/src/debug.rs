/// Debug macro that wraps solana_program_log::log!
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug")]
        solana_program_log::log!($($arg)*)
    };
}
