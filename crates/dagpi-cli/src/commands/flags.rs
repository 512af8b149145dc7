//! Flags command listing the pride flag names

use crate::utils::ColoredOutput;
use dagpi::PrideFlag;

pub struct FlagsCommand;

impl FlagsCommand {
    pub fn run() {
        println!("{}", ColoredOutput::highlight("Pride flags:"));
        for flag in PrideFlag::ALL {
            println!("  {}", flag);
        }
    }
}
