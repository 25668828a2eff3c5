pub mod chromosome;
pub mod key;
pub mod nucleotide;
pub mod refalt;

mod digest;
