//src/asm/

pub mod opcodes;
pub mod instructions;
pub mod parse_errors;
pub mod parser;

pub use instructions::{Instruction, RegisterId};
pub use opcodes::Opcode;
pub use parse_errors::{ParseError, RejectKind};
pub use parser::parse_line;
