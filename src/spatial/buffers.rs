//! Ping-pong buffers and the field store
//!
//! A `PingPong<T>` owns two physically distinct grids plus the index of the
//! one currently holding the latest generation. Stages read `current` and
//! write the other buffer; the scheduler then flips the index. Source and
//! destination can never alias, which `roles` asserts.

use crate::domain::cell::FluidCell;

use super::grid::FieldGrid;

pub struct PingPong<T> {
    buffers: [FieldGrid<T>; 2],
    current: usize,
}

impl<T: Copy + Default> PingPong<T> {
    pub fn new(resolution: u32) -> Self {
        Self {
            buffers: [FieldGrid::new(resolution), FieldGrid::new(resolution)],
            current: 0,
        }
    }

    /// Zero both buffers and reset the role index
    pub fn reset(&mut self) {
        for buffer in self.buffers.iter_mut() {
            buffer.fill(T::default());
        }
        self.current = 0;
    }
}

impl<T> PingPong<T> {
    #[inline]
    pub fn current(&self) -> &FieldGrid<T> {
        &self.buffers[self.current]
    }

    /// Mutable access to the latest generation, for border-only passes and
    /// host commands issued between ticks
    #[inline]
    pub fn current_mut(&mut self) -> &mut FieldGrid<T> {
        &mut self.buffers[self.current]
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Split into (source, destination) for one stage dispatch
    pub fn roles(&mut self) -> (&FieldGrid<T>, &mut FieldGrid<T>) {
        let [a, b] = &mut self.buffers;
        let (src, dst) = if self.current == 0 { (&*a, b) } else { (&*b, a) };
        assert!(
            !std::ptr::eq(src, &*dst),
            "stage source and destination alias"
        );
        (src, dst)
    }

    /// Promote the destination of the last dispatch to current
    #[inline]
    pub fn swap(&mut self) {
        self.current ^= 1;
    }
}

/// Every buffer one solver owns, allocated once at init.
pub struct FieldStore {
    resolution: u32,
    /// velocity (x, y) + concentration, RGBA-float layout
    pub fluid: PingPong<FluidCell>,
    /// pre-diffusion snapshot held fixed across Jacobi sweeps
    pub diffusion_base: FieldGrid<FluidCell>,
    pub divergence: FieldGrid<f32>,
    pub pressure: PingPong<f32>,
}

impl FieldStore {
    pub fn new(resolution: u32) -> Self {
        Self {
            resolution,
            fluid: PingPong::new(resolution),
            diffusion_base: FieldGrid::new(resolution),
            divergence: FieldGrid::new(resolution),
            pressure: PingPong::new(resolution),
        }
    }

    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Zero every field
    pub fn reset(&mut self) {
        self.fluid.reset();
        self.diffusion_base.fill(FluidCell::ZERO);
        self.divergence.fill(0.0);
        self.pressure.reset();
    }

    /// Bytes held by all buffers
    pub fn memory_bytes(&self) -> usize {
        let cells = (self.resolution as usize) * (self.resolution as usize);
        cells * (3 * std::mem::size_of::<FluidCell>() + 3 * std::mem::size_of::<f32>())
    }
}
