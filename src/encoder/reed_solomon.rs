/// Reed-Solomon error correction codeword generation
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use crate::utils::gf256::Gf256;

/// Generator polynomial prod(x - alpha^i) for i in 0..degree.
///
/// Coefficients run from x^degree (always 1) down to x^0.
pub fn generator_polynomial(degree: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 0..degree {
        let root = Gf256::exp(i);
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coeff) in poly.iter().enumerate() {
            next[j] ^= coeff;
            next[j + 1] ^= Gf256::mul(coeff, root);
        }
        poly = next;
    }
    poly
}

/// Reed-Solomon encoder for a fixed number of EC codewords
pub struct ReedSolomonEncoder {
    /// Generator without its leading 1
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Coder for blocks carrying `num_ecc_codewords` EC codewords
    pub fn new(num_ecc_codewords: usize) -> Self {
        let generator = generator_polynomial(num_ecc_codewords)[1..].to_vec();
        Self { generator }
    }

    /// EC codewords produced per block
    pub fn num_ecc_codewords(&self) -> usize {
        self.generator.len()
    }

    /// Remainder of data(x) * x^n divided by the generator, highest degree first
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let n = self.generator.len();
        let mut remainder = vec![0u8; n];
        if n == 0 {
            return remainder;
        }
        for &d in data {
            let factor = d ^ remainder[0];
            remainder.rotate_left(1);
            remainder[n - 1] = 0;
            for (r, &g) in remainder.iter_mut().zip(&self.generator) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }
}
