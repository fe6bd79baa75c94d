//! Poseidon over the BN254 scalar field
//!
//! Width 9, rate 8, `x^5` S-box, 8 full and 63 partial rounds. Round
//! constants and the Cauchy MDS matrix are drawn from the Grain LFSR, so the
//! whole permutation follows from the parameters in `zkdex_params::poseidon`.
//!
//! The sponge keeps word 0 as capacity (initialised to `2^64`) and absorbs
//! into words `1..=8`, permuting after every eighth word. Finalisation adds
//! one at the next free rate position and permutes; the digest is word 1.

use zkdex_params::poseidon::{
    CAPACITY_INIT_LOG2, FIELD_BITS, FULL_ROUNDS, GRAIN_FIELD_PRIME, GRAIN_SBOX_POW,
    GRAIN_WARMUP_BITS, PARTIAL_ROUNDS, RATE, SBOX_DEGREE, WIDTH,
};

use crate::ec::jubjub::FieldElement;
use crate::error::{Error, Result};
use crate::types::U256;

/// Permutation state
pub type State = [FieldElement; WIDTH];

/// The 80-bit Grain LFSR used to derive the constants
///
/// Bit `i` of the register is the `i`-th oldest bit.
struct Grain {
    state: u128,
}

impl Grain {
    const SIZE: u32 = 80;

    fn new() -> Self {
        let mut state = 0u128;
        let mut pos = 0u32;
        let mut append = |width: u32, value: u64| {
            for i in (0..width).rev() {
                state |= (((value >> i) & 1) as u128) << pos;
                pos += 1;
            }
        };
        append(2, GRAIN_FIELD_PRIME as u64);
        append(4, GRAIN_SBOX_POW as u64);
        append(12, FIELD_BITS as u64);
        append(12, WIDTH as u64);
        append(10, FULL_ROUNDS as u64);
        append(10, PARTIAL_ROUNDS as u64);
        append(30, (1 << 30) - 1);

        let mut grain = Self { state };
        for _ in 0..GRAIN_WARMUP_BITS {
            grain.clock();
        }
        grain
    }

    fn clock(&mut self) -> bool {
        let s = self.state;
        let bit = ((s >> 62) ^ (s >> 51) ^ (s >> 38) ^ (s >> 23) ^ (s >> 13) ^ s) & 1;
        self.state = (s >> 1) | (bit << (Self::SIZE - 1));
        bit == 1
    }

    /// Self-shrinking output: a pair `(1, b)` yields `b`, `(0, _)` is dropped
    fn next_bit(&mut self) -> bool {
        loop {
            let keep = self.clock();
            let bit = self.clock();
            if keep {
                return bit;
            }
        }
    }

    fn next_uint(&mut self) -> U256 {
        let mut acc = U256::ZERO;
        for _ in 0..FIELD_BITS {
            acc = acc.shl(1).or(&U256::from_u64(self.next_bit() as u64));
        }
        acc
    }

    /// A field element by rejection sampling
    fn next_field(&mut self) -> FieldElement {
        loop {
            if let Some(v) = FieldElement::from_uint(&self.next_uint()) {
                return v;
            }
        }
    }

    /// A field element reduced modulo p
    fn next_field_reduced(&mut self) -> FieldElement {
        FieldElement::from_uint_reduced(&self.next_uint())
    }
}

/// Round constants and MDS matrix of the permutation
#[derive(Clone, Debug)]
pub struct Poseidon {
    round_constants: Vec<State>,
    mds: [State; WIDTH],
}

impl Poseidon {
    /// Derive the constants from the Grain LFSR
    pub fn new() -> Result<Self> {
        let mut grain = Grain::new();

        let round_constants = (0..FULL_ROUNDS + PARTIAL_ROUNDS)
            .map(|_| core::array::from_fn(|_| grain.next_field()))
            .collect();

        let xs: State = core::array::from_fn(|_| grain.next_field_reduced());
        let ys: State = core::array::from_fn(|_| grain.next_field_reduced());
        let mut mds = [[FieldElement::zero(); WIDTH]; WIDTH];
        for (row, x) in mds.iter_mut().zip(xs.iter()) {
            for (cell, y) in row.iter_mut().zip(ys.iter()) {
                *cell = x
                    .add(y)
                    .invert()
                    .ok_or_else(|| Error::range("poseidon mds", "x_i + y_j is zero"))?;
            }
        }

        Ok(Self {
            round_constants,
            mds,
        })
    }

    fn sbox(x: &FieldElement) -> FieldElement {
        x.pow(&[SBOX_DEGREE, 0, 0, 0])
    }

    fn mix(&self, state: &State) -> State {
        core::array::from_fn(|i| {
            self.mds[i]
                .iter()
                .zip(state.iter())
                .fold(FieldElement::zero(), |acc, (m, s)| acc.add(&m.mul(s)))
        })
    }

    /// Apply the permutation in place
    pub fn permute(&self, state: &mut State) {
        let half = FULL_ROUNDS / 2;
        for (round, constants) in self.round_constants.iter().enumerate() {
            for (s, c) in state.iter_mut().zip(constants.iter()) {
                *s = s.add(c);
            }
            if round < half || round >= half + PARTIAL_ROUNDS {
                for s in state.iter_mut() {
                    *s = Self::sbox(s);
                }
            } else {
                state[0] = Self::sbox(&state[0]);
            }
            *state = self.mix(state);
        }
    }

    /// Start a sponge over this permutation
    pub fn sponge(&self) -> Sponge<'_> {
        Sponge::new(self)
    }

    /// Hash a word list in one call
    pub fn hash(&self, words: &[FieldElement]) -> FieldElement {
        let mut sponge = self.sponge();
        for word in words {
            sponge.absorb(word);
        }
        sponge.finalize()
    }
}

/// Absorbing sponge state
#[derive(Clone, Debug)]
pub struct Sponge<'a> {
    poseidon: &'a Poseidon,
    state: State,
    absorbed: usize,
}

impl<'a> Sponge<'a> {
    fn new(poseidon: &'a Poseidon) -> Self {
        let mut state = [FieldElement::zero(); WIDTH];
        state[0] = FieldElement::from_uint_reduced(&U256::ONE.shl(CAPACITY_INIT_LOG2));
        Self {
            poseidon,
            state,
            absorbed: 0,
        }
    }

    /// Add one word to the rate, permuting when the rate is full
    pub fn absorb(&mut self, word: &FieldElement) {
        let slot = 1 + self.absorbed;
        self.state[slot] = self.state[slot].add(word);
        self.absorbed += 1;
        if self.absorbed == RATE {
            self.poseidon.permute(&mut self.state);
            self.absorbed = 0;
        }
    }

    /// Pad with a single one and squeeze the digest
    pub fn finalize(mut self) -> FieldElement {
        let slot = 1 + self.absorbed;
        self.state[slot] = self.state[slot].add(&FieldElement::one());
        self.poseidon.permute(&mut self.state);
        self.state[1]
    }
}
