//! Shared Hilbert-transform plumbing for the cycle family and MAMA.
//!
//! One FIR component keeps separate even/odd memory banks, mirroring the
//! reference's interleaved evaluation; the 4-bar weighted price smoother
//! feeds the detrender. The homodyne discriminator state (I2/Q2, Re/Im,
//! period, smoothed period) evolves strictly left to right — order of
//! operations here is load-bearing for numerical parity and must not be
//! "simplified".

const A: f64 = 0.0962;
const B: f64 = 0.5769;

pub(crate) const RAD2DEG: f64 = 180.0 / std::f64::consts::PI;
pub(crate) const DEG2RAD: f64 = std::f64::consts::PI / 180.0;

/// One Hilbert FIR stage (detrender, Q1, jI or jQ) with even/odd banks.
pub(crate) struct HtComponent {
    even: [f64; 3],
    odd: [f64; 3],
    prev_even: f64,
    prev_odd: f64,
    prev_input_even: f64,
    prev_input_odd: f64,
}

impl HtComponent {
    pub(crate) fn new() -> Self {
        HtComponent {
            even: [0.0; 3],
            odd: [0.0; 3],
            prev_even: 0.0,
            prev_odd: 0.0,
            prev_input_even: 0.0,
            prev_input_odd: 0.0,
        }
    }

    #[inline]
    pub(crate) fn step_even(&mut self, idx: usize, input: f64, adjusted_prev_period: f64) -> f64 {
        let temp = A * input;
        let mut out = -self.even[idx];
        self.even[idx] = temp;
        out += temp;
        out -= self.prev_even;
        self.prev_even = B * self.prev_input_even;
        out += self.prev_even;
        self.prev_input_even = input;
        out * adjusted_prev_period
    }

    #[inline]
    pub(crate) fn step_odd(&mut self, idx: usize, input: f64, adjusted_prev_period: f64) -> f64 {
        let temp = A * input;
        let mut out = -self.odd[idx];
        self.odd[idx] = temp;
        out += temp;
        out -= self.prev_odd;
        self.prev_odd = B * self.prev_input_odd;
        out += self.prev_odd;
        self.prev_input_odd = input;
        out * adjusted_prev_period
    }
}

/// Running 4-bar WMA over the raw price, weights 1..4 newest-heavy.
pub(crate) struct PriceWma {
    period_sub: f64,
    period_sum: f64,
    trailing_value: f64,
    trailing_idx: usize,
}

impl PriceWma {
    /// Seed from the first three bars starting at `start`; the first call
    /// to [`step`](Self::step) then completes the first window.
    pub(crate) fn seed(real: &[f64], start: usize) -> Self {
        let mut period_sub = 0.0;
        let mut period_sum = 0.0;
        let mut temp = real[start];
        period_sub += temp;
        period_sum += temp;
        temp = real[start + 1];
        period_sub += temp;
        period_sum += temp * 2.0;
        temp = real[start + 2];
        period_sub += temp;
        period_sum += temp * 3.0;
        PriceWma {
            period_sub,
            period_sum,
            trailing_value: 0.0,
            trailing_idx: start,
        }
    }

    #[inline]
    pub(crate) fn step(&mut self, real: &[f64], new_price: f64) -> f64 {
        self.period_sub += new_price;
        self.period_sub -= self.trailing_value;
        self.period_sum += new_price * 4.0;
        self.trailing_value = real[self.trailing_idx];
        self.trailing_idx += 1;
        let smoothed = self.period_sum * 0.1;
        self.period_sum -= self.period_sub;
        smoothed
    }
}

/// Everything downstream of the price smoother: the four FIR stages, the
/// homodyne discriminator and the adaptive period estimate.
pub(crate) struct CycleState {
    detrender: HtComponent,
    q1: HtComponent,
    j_i: HtComponent,
    j_q: HtComponent,
    hilbert_idx: usize,
    i1_for_odd_prev2: f64,
    i1_for_odd_prev3: f64,
    i1_for_even_prev2: f64,
    i1_for_even_prev3: f64,
    prev_i2: f64,
    prev_q2: f64,
    re: f64,
    im: f64,
    pub(crate) period: f64,
    pub(crate) smooth_period: f64,
}

/// Per-bar values a consumer may need besides the period estimates.
pub(crate) struct CycleStep {
    /// The 3-bar-delayed in-phase component used this bar.
    pub(crate) i1: f64,
    /// The quadrature component produced this bar.
    pub(crate) q1: f64,
    pub(crate) i2: f64,
    pub(crate) q2: f64,
}

impl CycleState {
    pub(crate) fn new() -> Self {
        CycleState {
            detrender: HtComponent::new(),
            q1: HtComponent::new(),
            j_i: HtComponent::new(),
            j_q: HtComponent::new(),
            hilbert_idx: 0,
            i1_for_odd_prev2: 0.0,
            i1_for_odd_prev3: 0.0,
            i1_for_even_prev2: 0.0,
            i1_for_even_prev3: 0.0,
            prev_i2: 0.0,
            prev_q2: 0.0,
            re: 0.0,
            im: 0.0,
            period: 0.0,
            smooth_period: 0.0,
        }
    }

    /// Advance one bar. `today` is the absolute input index (its parity
    /// selects the memory bank), `smoothed_value` the 4-bar WMA output.
    pub(crate) fn step(&mut self, today: usize, smoothed_value: f64) -> CycleStep {
        let adjusted_prev_period = 0.075 * self.period + 0.54;

        let (i1, q1, i2, q2);
        if today % 2 == 0 {
            let idx = self.hilbert_idx;
            let detrender = self.detrender.step_even(idx, smoothed_value, adjusted_prev_period);
            let q1v = self.q1.step_even(idx, detrender, adjusted_prev_period);
            let ji = self.j_i.step_even(idx, self.i1_for_even_prev3, adjusted_prev_period);
            let jq = self.j_q.step_even(idx, q1v, adjusted_prev_period);
            self.hilbert_idx += 1;
            if self.hilbert_idx == 3 {
                self.hilbert_idx = 0;
            }
            q2 = 0.2 * (q1v + ji) + 0.8 * self.prev_q2;
            i2 = 0.2 * (self.i1_for_even_prev3 - jq) + 0.8 * self.prev_i2;
            i1 = self.i1_for_even_prev3;
            q1 = q1v;
            self.i1_for_odd_prev3 = self.i1_for_odd_prev2;
            self.i1_for_odd_prev2 = detrender;
        } else {
            let idx = self.hilbert_idx;
            let detrender = self.detrender.step_odd(idx, smoothed_value, adjusted_prev_period);
            let q1v = self.q1.step_odd(idx, detrender, adjusted_prev_period);
            let ji = self.j_i.step_odd(idx, self.i1_for_odd_prev3, adjusted_prev_period);
            let jq = self.j_q.step_odd(idx, q1v, adjusted_prev_period);
            q2 = 0.2 * (q1v + ji) + 0.8 * self.prev_q2;
            i2 = 0.2 * (self.i1_for_odd_prev3 - jq) + 0.8 * self.prev_i2;
            i1 = self.i1_for_odd_prev3;
            q1 = q1v;
            self.i1_for_even_prev3 = self.i1_for_even_prev2;
            self.i1_for_even_prev2 = detrender;
        }

        self.re = 0.2 * (i2 * self.prev_i2 + q2 * self.prev_q2) + 0.8 * self.re;
        self.im = 0.2 * (i2 * self.prev_q2 - q2 * self.prev_i2) + 0.8 * self.im;
        self.prev_q2 = q2;
        self.prev_i2 = i2;

        let prev_period = self.period;
        if self.im != 0.0 && self.re != 0.0 {
            self.period = 360.0 / ((self.im / self.re).atan() * RAD2DEG);
        }
        let upper = 1.5 * prev_period;
        if self.period > upper {
            self.period = upper;
        }
        let lower = 0.67 * prev_period;
        if self.period < lower {
            self.period = lower;
        }
        if self.period < 6.0 {
            self.period = 6.0;
        } else if self.period > 50.0 {
            self.period = 50.0;
        }
        self.period = 0.2 * self.period + 0.8 * prev_period;
        self.smooth_period = 0.33 * self.period + 0.67 * self.smooth_period;

        CycleStep { i1, q1, i2, q2 }
    }
}

/// Slot count of the smoothed-price ring buffer used by the phase and
/// trend indicators.
pub(crate) const SMOOTH_PRICE_SIZE: usize = 50;
