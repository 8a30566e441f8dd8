/// Anything able to produce the integer the blink cadence is derived from.
///
/// The value is requested exactly once, during startup.
pub trait ComputationSource {
    fn compute(&mut self) -> i32;
}

/// A source always answering with the same value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fixed(pub i32);

impl ComputationSource for Fixed {
    fn compute(&mut self) -> i32 {
        self.0
    }
}

impl<F> ComputationSource for F
where
    F: FnMut() -> i32,
{
    fn compute(&mut self) -> i32 {
        self()
    }
}

#[cfg(feature = "linked-routine")]
extern "C" {
    fn compiled_asm() -> i32;
}

/// The externally compiled routine, resolved at link time.
///
/// `build.rs` adds the static library holding `compiled_asm` when the `linked-routine`
/// feature is enabled.
#[cfg(feature = "linked-routine")]
#[derive(Copy, Clone, Debug, Default)]
pub struct LinkedRoutine;

#[cfg(feature = "linked-routine")]
impl ComputationSource for LinkedRoutine {
    fn compute(&mut self) -> i32 {
        // SAFETY: `compiled_asm` takes no arguments, follows the C ABI and touches no state
        // visible to Rust.
        unsafe { compiled_asm() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_repeats_its_value() {
        let mut source = Fixed(17);
        assert_eq!(source.compute(), 17);
        assert_eq!(source.compute(), 17);
    }

    #[test]
    fn closures_are_sources() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            -5
        };

        assert_eq!(source.compute(), -5);
        drop(source);
        assert_eq!(calls, 1);
    }
}
