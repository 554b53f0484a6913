//! Simplex noise implementation.
//!
//! Pure Rust implementation of 4D simplex noise based on Stefan Gustavson's
//! reference implementation, adapted for deterministic output.

use super::Noise4D;
use crate::rng::RandomStream;

/// 4D Simplex noise generator.
#[derive(Clone)]
pub struct SimplexNoise {
    /// Permutation table (256 values, doubled for wrapping).
    perm: [u8; 512],
}

impl SimplexNoise {
    /// Skewing factor for 4D.
    const F4: f64 = 0.30901699437494745; // (sqrt(5) - 1) / 4
    /// Unskewing factor for 4D.
    const G4: f64 = 0.1381966011250105; // (5 - sqrt(5)) / 20

    /// Gradient vectors for 4D: midpoints of the edges of a 4D hypercube.
    const GRAD4: [[f64; 4]; 32] = [
        [0.0, 1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, -1.0],
        [0.0, 1.0, -1.0, 1.0],
        [0.0, 1.0, -1.0, -1.0],
        [0.0, -1.0, 1.0, 1.0],
        [0.0, -1.0, 1.0, -1.0],
        [0.0, -1.0, -1.0, 1.0],
        [0.0, -1.0, -1.0, -1.0],
        [1.0, 0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0, -1.0],
        [1.0, 0.0, -1.0, 1.0],
        [1.0, 0.0, -1.0, -1.0],
        [-1.0, 0.0, 1.0, 1.0],
        [-1.0, 0.0, 1.0, -1.0],
        [-1.0, 0.0, -1.0, 1.0],
        [-1.0, 0.0, -1.0, -1.0],
        [1.0, 1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0, -1.0],
        [1.0, -1.0, 0.0, 1.0],
        [1.0, -1.0, 0.0, -1.0],
        [-1.0, 1.0, 0.0, 1.0],
        [-1.0, 1.0, 0.0, -1.0],
        [-1.0, -1.0, 0.0, 1.0],
        [-1.0, -1.0, 0.0, -1.0],
        [1.0, 1.0, 1.0, 0.0],
        [1.0, 1.0, -1.0, 0.0],
        [1.0, -1.0, 1.0, 0.0],
        [1.0, -1.0, -1.0, 0.0],
        [-1.0, 1.0, 1.0, 0.0],
        [-1.0, 1.0, -1.0, 0.0],
        [-1.0, -1.0, 1.0, 0.0],
        [-1.0, -1.0, -1.0, 0.0],
    ];

    /// Create a new simplex noise generator with the given seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = RandomStream::new(seed);

        let mut perm = [0u8; 512];
        let mut source: Vec<u8> = (0..=255).collect();

        // Fisher-Yates shuffle
        for i in (1..256).rev() {
            let j = rng.gen_range(0..=i);
            source.swap(i, j);
        }

        // Double the permutation table for overflow handling
        perm[..256].copy_from_slice(&source);
        perm[256..512].copy_from_slice(&source);

        Self { perm }
    }

    /// Contribution of one simplex corner.
    #[inline]
    fn corner(&self, gi: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let mut t = 0.6 - x * x - y * y - z * z - w * w;
        if t < 0.0 {
            return 0.0;
        }
        t *= t;
        let g = &Self::GRAD4[gi % 32];
        t * t * (g[0] * x + g[1] * y + g[2] * z + g[3] * w)
    }

    #[inline]
    fn hash(&self, i: usize, j: usize, k: usize, l: usize) -> usize {
        let p = &self.perm;
        p[i + p[j + p[k + p[l] as usize] as usize] as usize] as usize
    }

    /// Fast floor function.
    #[inline]
    fn fast_floor(x: f64) -> i32 {
        let xi = x as i32;
        if x < xi as f64 {
            xi - 1
        } else {
            xi
        }
    }
}

impl Noise4D for SimplexNoise {
    fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        // Skew the (x,y,z,w) space to determine which cell of 24 simplices we're in
        let s = (x + y + z + w) * Self::F4;
        let i = Self::fast_floor(x + s);
        let j = Self::fast_floor(y + s);
        let k = Self::fast_floor(z + s);
        let l = Self::fast_floor(w + s);

        // Unskew the cell origin back to (x,y,z,w) space
        let t = (i + j + k + l) as f64 * Self::G4;
        let x0 = x - (i as f64 - t);
        let y0 = y - (j as f64 - t);
        let z0 = z - (k as f64 - t);
        let w0 = w - (l as f64 - t);

        // Rank the coordinates by magnitude to find the simplex traversal order
        let mut rank = [0u8; 4];
        let d = [x0, y0, z0, w0];
        for a in 0..4 {
            for b in (a + 1)..4 {
                if d[a] > d[b] {
                    rank[a] += 1;
                } else {
                    rank[b] += 1;
                }
            }
        }

        // Integer offsets for the second, third and fourth corners
        let step = |threshold: u8| -> [usize; 4] {
            [
                (rank[0] >= threshold) as usize,
                (rank[1] >= threshold) as usize,
                (rank[2] >= threshold) as usize,
                (rank[3] >= threshold) as usize,
            ]
        };
        let o1 = step(3);
        let o2 = step(2);
        let o3 = step(1);

        let offset = |o: [usize; 4], n: f64| -> [f64; 4] {
            [
                x0 - o[0] as f64 + n * Self::G4,
                y0 - o[1] as f64 + n * Self::G4,
                z0 - o[2] as f64 + n * Self::G4,
                w0 - o[3] as f64 + n * Self::G4,
            ]
        };
        let p1 = offset(o1, 1.0);
        let p2 = offset(o2, 2.0);
        let p3 = offset(o3, 3.0);
        let p4 = offset([1, 1, 1, 1], 4.0);

        // Hash coordinates of the five simplex corners
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;
        let ll = (l & 255) as usize;

        let gi0 = self.hash(ii, jj, kk, ll);
        let gi1 = self.hash(ii + o1[0], jj + o1[1], kk + o1[2], ll + o1[3]);
        let gi2 = self.hash(ii + o2[0], jj + o2[1], kk + o2[2], ll + o2[3]);
        let gi3 = self.hash(ii + o3[0], jj + o3[1], kk + o3[2], ll + o3[3]);
        let gi4 = self.hash(ii + 1, jj + 1, kk + 1, ll + 1);

        let n0 = self.corner(gi0, x0, y0, z0, w0);
        let n1 = self.corner(gi1, p1[0], p1[1], p1[2], p1[3]);
        let n2 = self.corner(gi2, p2[0], p2[1], p2[2], p2[3]);
        let n3 = self.corner(gi3, p3[0], p3[1], p3[2], p3[3]);
        let n4 = self.corner(gi4, p4[0], p4[1], p4[2], p4[3]);

        // Scale to return values in the interval [-1, 1]
        27.0 * (n0 + n1 + n2 + n3 + n4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_deterministic() {
        let noise1 = SimplexNoise::new(42);
        let noise2 = SimplexNoise::new(42);

        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            assert_eq!(noise1.sample(x, y, -x, 0.5), noise2.sample(x, y, -x, 0.5));
        }
    }

    #[test]
    fn test_simplex_range() {
        let noise = SimplexNoise::new(42);
        let mut min = f64::MAX;
        let mut max = f64::MIN;

        for i in 0..100 {
            for j in 0..100 {
                let x = i as f64 * 0.07;
                let y = j as f64 * 0.07;
                let v = noise.sample(x, y, x * 0.5 - y, y * 0.3 + 1.7);
                min = min.min(v);
                max = max.max(v);
            }
        }

        // Values should be roughly in [-1, 1]
        assert!(min >= -1.5);
        assert!(max <= 1.5);
        assert!(max > min);
    }

    #[test]
    fn test_simplex_negative_coordinates() {
        let noise = SimplexNoise::new(0);
        let v = noise.sample(-3.25, -0.5, -17.75, -0.01);
        assert!(v.is_finite());
        assert!(v.abs() <= 1.5);
    }

    #[test]
    fn test_different_seeds() {
        let noise1 = SimplexNoise::new(42);
        let noise2 = SimplexNoise::new(43);

        let different = (0..10).any(|i| {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            noise1.sample(x, y, 0.3, 0.7) != noise2.sample(x, y, 0.3, 0.7)
        });
        assert!(different);
    }
}
