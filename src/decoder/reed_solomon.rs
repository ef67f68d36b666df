/// Reed-Solomon error correction for reading symbols back
/// Codewords are high-degree first; the generator roots are alpha^0 .. alpha^(n-1)
use crate::utils::gf256::Gf256;

/// Reed-Solomon decoder for QR codes
pub struct ReedSolomonDecoder {
    num_ecc_codewords: usize,
}

impl ReedSolomonDecoder {
    /// Coder for blocks carrying `num_ecc_codewords` EC codewords
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self { num_ecc_codewords }
    }

    /// Correct `received` in place. Returns the number of corrected codewords.
    pub fn decode(&self, received: &mut [u8]) -> Result<usize, &'static str> {
        if received.len() > 255 {
            return Err("Block longer than the field allows");
        }
        let syndrome = self.calculate_syndrome(received);
        if syndrome.iter().all(|&s| s == 0) {
            return Ok(0);
        }

        let (sigma, num_errors) = Self::find_error_locator(&syndrome);
        if num_errors == 0 || num_errors > self.num_ecc_codewords / 2 {
            return Err("Too many errors");
        }
        if sigma.len() != num_errors + 1 {
            return Err("Error locator degree mismatch");
        }

        let positions = Self::find_error_positions(&sigma, received.len());
        if positions.len() != num_errors {
            return Err("Wrong number of error positions found");
        }

        let omega = Self::error_evaluator(&syndrome, &sigma);
        let n = received.len();
        for &pos in &positions {
            let x = Gf256::exp(n - 1 - pos);
            let x_inv = Gf256::inverse(x);
            let omega_val = eval_low_first(&omega, x_inv);
            let sigma_prime_val = sigma
                .iter()
                .enumerate()
                .skip(1)
                .step_by(2)
                .fold(0u8, |acc, (i, &c)| {
                    acc ^ Gf256::mul(c, Gf256::pow_usize(x_inv, i - 1))
                });
            if sigma_prime_val == 0 {
                return Err("Sigma derivative is zero");
            }
            received[pos] ^= Gf256::mul(x, Gf256::div(omega_val, sigma_prime_val));
        }

        if self.calculate_syndrome(received).iter().any(|&s| s != 0) {
            return Err("Uncorrectable error");
        }
        Ok(positions.len())
    }

    /// S_i = r(alpha^i)
    fn calculate_syndrome(&self, received: &[u8]) -> Vec<u8> {
        (0..self.num_ecc_codewords)
            .map(|i| {
                let x = Gf256::exp(i);
                received.iter().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
            })
            .collect()
    }

    /// Berlekamp-Massey; returns sigma (low degree first, trimmed) and its
    /// linear complexity
    fn find_error_locator(syndrome: &[u8]) -> (Vec<u8>, usize) {
        let mut sigma = vec![1u8];
        let mut prev = vec![1u8];
        let mut prev_delta = 1u8;
        let mut l = 0usize;
        let mut m = 1usize;

        for k in 0..syndrome.len() {
            let mut delta = syndrome[k];
            for i in 1..=l.min(sigma.len() - 1) {
                delta ^= Gf256::mul(sigma[i], syndrome[k - i]);
            }
            if delta == 0 {
                m += 1;
                continue;
            }

            let coef = Gf256::div(delta, prev_delta);
            let snapshot = sigma.clone();
            if sigma.len() < prev.len() + m {
                sigma.resize(prev.len() + m, 0);
            }
            for (j, &b) in prev.iter().enumerate() {
                sigma[j + m] ^= Gf256::mul(coef, b);
            }

            if 2 * l <= k {
                l = k + 1 - l;
                prev = snapshot;
                prev_delta = delta;
                m = 1;
            } else {
                m += 1;
            }
        }

        while sigma.len() > 1 && sigma.last() == Some(&0) {
            sigma.pop();
        }
        (sigma, l)
    }

    /// Chien search: indices (high-degree first) whose locator root vanishes
    fn find_error_positions(sigma: &[u8], n: usize) -> Vec<usize> {
        (0..n)
            .filter(|&pos| {
                let x_inv = Gf256::inverse(Gf256::exp(n - 1 - pos));
                eval_low_first(sigma, x_inv) == 0
            })
            .collect()
    }

    /// omega = S(x) * sigma(x) mod x^n
    fn error_evaluator(syndrome: &[u8], sigma: &[u8]) -> Vec<u8> {
        (0..syndrome.len())
            .map(|i| {
                (0..=i.min(sigma.len() - 1))
                    .fold(0u8, |acc, j| acc ^ Gf256::mul(sigma[j], syndrome[i - j]))
            })
            .collect()
    }
}

fn eval_low_first(poly: &[u8], x: u8) -> u8 {
    poly.iter().rev().fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
}
