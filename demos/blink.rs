//! The status LED demo: blink forever at the cadence the compiled routine asks for.
//!
//! Build with `--features linked-routine` and point `COMPILED_ASM_LIB_DIR` at the directory
//! holding `libcompiled.a` to call the real routine. Without the feature a fixed stand-in
//! result is used.
//!
//! This example assumes that physical pin #7 is connected to diode's anode (+).
//! Make sure to put resistor to reduce current flowing through the diode.

use blink_cadence::{BlinkConfig, BlinkController, ComputationSource, HostBoard};
use std::error::Error;

#[cfg(feature = "linked-routine")]
fn source() -> impl ComputationSource {
    blink_cadence::LinkedRoutine
}

#[cfg(not(feature = "linked-routine"))]
fn source() -> impl ComputationSource {
    blink_cadence::Fixed(17)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut board = HostBoard::open()?;
    let mut controller =
        BlinkController::start(&mut board, &BlinkConfig::default(), &mut source())?;

    let never = controller.run()?;
    match never {}
}
