//! Sample processor trait.
//!
//! The [`Processor`] trait is the per-signal-path interface used by the
//! registry's `Shaper`: one sample in, one sample out, with block helpers.
//!
//! - **Mono**: one instance per signal path. Stereo is two instances, which
//!   keeps every path's state isolated.
//! - **Object-safe**: usable as `dyn Processor`, though static dispatch is
//!   preferred on the audio thread.
//! - **No allocations**: every method is callable from a real-time callback.

/// Core trait for per-sample processors.
///
/// # Example
///
/// ```rust
/// use saturna_core::Processor;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Processor for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn reset(&mut self) {}
/// }
///
/// let mut gain = Gain { gain: 0.5 };
/// let mut buffer = [1.0, -1.0];
/// gain.process_block_inplace(&mut buffer);
/// assert_eq!(buffer, [0.5, -0.5]);
/// ```
pub trait Processor {
    /// Process a single sample, advancing any internal state by one step.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Clear all internal state without changing configuration.
    ///
    /// Called on transport stop or sample-rate change.
    fn reset(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        calls: usize,
    }

    impl Processor for Counter {
        fn process(&mut self, input: f32) -> f32 {
            self.calls += 1;
            input + self.calls as f32
        }

        fn reset(&mut self) {
            self.calls = 0;
        }
    }

    #[test]
    fn test_process_block_runs_in_order() {
        let mut counter = Counter { calls: 0 };
        let input = [0.0; 4];
        let mut output = [0.0; 4];
        counter.process_block(&input, &mut output);
        assert_eq!(output, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_object_safe() {
        let mut counter = Counter { calls: 0 };
        let processor: &mut dyn Processor = &mut counter;
        assert_eq!(processor.process(0.0), 1.0);
        processor.reset();
        assert_eq!(processor.process(0.0), 1.0);
    }
}
