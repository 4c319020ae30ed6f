// Linear congruential generator parameters
const MUL: u64 = 6364136223846793005; // Knuth section 3.3.4 (p.108)
const INC: u64 = 1442695040888963407;

/// Deterministic random source for every stochastic decision the renderer
/// makes: dot jitter, dot diameters, paper scatter, and the paper blend
/// factors. A `Pencil` seeded the same way always draws the same picture.
#[derive(Clone, PartialEq, Eq)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Builds a generator from an arbitrary byte-string seed. The bytes are
    /// folded with FNV-1a into the initial LCG state, so any seed length
    /// works and nearby seeds diverge immediately.
    pub fn from_seed(seed: &[u8]) -> Rng {
        let mut folded: u64 = 0xcbf29ce484222325;
        for &byte in seed {
            folded ^= u64::from(byte);
            folded = folded.wrapping_mul(0x100000001b3);
        }
        let mut rng = Rng {
            state: folded.wrapping_add(INC),
        };
        rng.bump();
        rng
    }

    /// Advances the internal state, returning the pre-advance value.
    fn bump(&mut self) -> u64 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(MUL).wrapping_add(INC);
        old_state
    }

    /// Picks a random value uniformly distributed between `0.0` (inclusive) and `1.0` (exclusive).
    pub fn rnd(&mut self) -> f64 {
        // Calculate the output function (XSH RR) from the pre-advance state.
        // This is a standard PCG-XSH-RR generator (O'Neill 2014, section 6.3.1).
        let old_state = self.bump();
        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let fac = xorshifted.rotate_right((old_state >> 59) as u32);
        2.0f64.powi(-32) * f64::from(fac)
    }

    /// Picks a random value uniformly distributed between `0.0` (inclusive) and `max` (exclusive).
    ///
    /// ```rust
    /// use pencil::rand::Rng;
    /// let mut rng = Rng::from_seed(b"pencil");
    /// let theta = rng.uniform(360.0);
    /// assert!((0.0..360.0).contains(&theta));
    /// ```
    pub fn uniform(&mut self, max: f64) -> f64 {
        self.rnd() * max
    }

    /// Picks a random value uniformly distributed between `min` (inclusive) and `max` (exclusive).
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        self.rnd() * (max - min) + min
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rnd_sequence() {
        let mut rng = Rng::from_seed(b"");
        let us: [f64; 8] = std::array::from_fn(|_| rng.rnd());
        assert_eq!(
            us,
            [
                0.3109588115476072,
                0.9492642977274954,
                0.9336690222844481,
                0.24253330891951919,
                0.2930452872533351,
                0.5899225939065218,
                0.22697986126877367,
                0.23580777016468346
            ]
        );

        let mut rng = Rng::from_seed(b"pencil");
        let us: [f64; 8] = std::array::from_fn(|_| rng.rnd());
        assert_eq!(
            us,
            [
                0.29105228721164167,
                0.5648343805223703,
                0.0014486846048384905,
                0.43173588323406875,
                0.07659841561689973,
                0.2720510356593877,
                0.7996840721461922,
                0.35636429069563746
            ]
        );
    }

    #[test]
    fn test_uniform_sequence() {
        let mut rng = Rng::from_seed(b"pencil");
        let maxes = [360.0, 100.0, 100.0, 20.0, 2.0, 0.5, 10.0, 1.0];
        let vs: [f64; 8] = std::array::from_fn(|i| rng.uniform(maxes[i]));
        assert_eq!(
            vs,
            [
                104.778823396191,
                56.483438052237034,
                0.14486846048384905,
                8.634717664681375,
                0.15319683123379946,
                0.13602551782969385,
                7.996840721461922,
                0.35636429069563746
            ]
        );
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = Rng::from_seed(b"bounds");
        for _ in 0..1000 {
            let v = rng.range(-3.0, 7.0);
            assert!((-3.0..7.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Rng::from_seed(b"paper and pencil");
        let mut b = Rng::from_seed(b"paper and pencil");
        for _ in 0..64 {
            assert_eq!(a.rnd(), b.rnd());
        }
    }

    #[test]
    fn test_distinct_seeds_diverge() {
        let mut a = Rng::from_seed(b"seed-a");
        let mut b = Rng::from_seed(b"seed-b");
        let same = (0..16).filter(|_| a.rnd() == b.rnd()).count();
        assert_eq!(same, 0);
    }
}
