// ============================================================================
// Console Module
// Interactive prompt loop around the calculator core
// ============================================================================

mod prompter;
mod session;

pub use prompter::{
    parse_yes_no, Command, Prompter, FIRST_OPERAND_PROMPT, OPERATION_PROMPT, PRECISION_PROMPT,
    SECOND_OPERAND_PROMPT, SIGN_POLICY_PROMPT,
};
pub use session::{configure, ConsoleObserver, ConsoleSession, SessionSummary, SharedWriter};
