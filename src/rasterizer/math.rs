//! Vector and matrix math for the software renderer
//!
//! Fixed-size vectors (2/3/4 components) and square column-major matrices
//! (2x2/3x3/4x4). `M * v` treats `v` as a column vector, `v * M` as a row
//! vector, and `A * B` applies `B` first. Nothing here reorders a product.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// Degrees to radians
pub fn radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Radians to degrees
pub fn degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Shared vector implementation. Each vector is a plain named-field struct;
/// positional indexing goes through `Index` and the color names are accessors.
macro_rules! impl_vector {
    ($name:ident, $n:expr, $($field:ident => $idx:literal),+) => {
        impl $name {
            /// Number of components
            pub const LEN: usize = $n;
            pub const ZERO: $name = $name { $($field: 0.0),+ };

            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Vector with every component set to `v`
            pub const fn splat(v: f32) -> Self {
                Self { $($field: v),+ }
            }

            pub fn dot(self, other: $name) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Unit vector in the same direction. A zero-length vector is
            /// returned unchanged so no NaN leaks into shading.
            pub fn normalize(self) -> $name {
                let len = self.length();
                if len <= 0.0 {
                    return self;
                }
                self / len
            }

            pub fn to_array(self) -> [f32; $n] {
                [$(self.$field),+]
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, other: $name) -> $name {
                $name { $($field: self.$field + other.$field),+ }
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, other: $name) -> $name {
                $name { $($field: self.$field - other.$field),+ }
            }
        }

        /// Component-wise product
        impl Mul for $name {
            type Output = $name;
            fn mul(self, other: $name) -> $name {
                $name { $($field: self.$field * other.$field),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = $name;
            fn mul(self, s: f32) -> $name {
                $name { $($field: self.$field * s),+ }
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;
            fn mul(self, v: $name) -> $name {
                v * self
            }
        }

        impl Div<f32> for $name {
            type Output = $name;
            fn div(self, s: f32) -> $name {
                $name { $($field: self.$field / s),+ }
            }
        }

        impl Neg for $name {
            type Output = $name;
            fn neg(self) -> $name {
                $name { $($field: -self.$field),+ }
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, other: $name) {
                $(self.$field += other.$field;)+
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, other: $name) {
                $(self.$field -= other.$field;)+
            }
        }

        impl MulAssign<f32> for $name {
            fn mul_assign(&mut self, s: f32) {
                $(self.$field *= s;)+
            }
        }

        impl Index<usize> for $name {
            type Output = f32;
            fn index(&self, i: usize) -> &f32 {
                match i {
                    $($idx => &self.$field,)+
                    _ => panic!("{} index {} out of range", stringify!($name), i),
                }
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                match i {
                    $($idx => &mut self.$field,)+
                    _ => panic!("{} index {} out of range", stringify!($name), i),
                }
            }
        }
    };
}

/// 2D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl_vector!(Vec2, 2, x => 0, y => 1);

impl Vec2 {
    pub fn r(self) -> f32 {
        self.x
    }

    pub fn g(self) -> f32 {
        self.y
    }
}

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl_vector!(Vec3, 3, x => 0, y => 1, z => 2);

impl Vec3 {
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

    pub fn from_vec2(v: Vec2, z: f32) -> Self {
        Self { x: v.x, y: v.y, z }
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn r(self) -> f32 {
        self.x
    }

    pub fn g(self) -> f32 {
        self.y
    }

    pub fn b(self) -> f32 {
        self.z
    }
}

/// 4D Vector (homogeneous points, RGBA)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vector!(Vec4, 4, x => 0, y => 1, z => 2, w => 3);

impl Vec4 {
    pub fn from_vec3(v: Vec3, w: f32) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w }
    }

    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn r(self) -> f32 {
        self.x
    }

    pub fn g(self) -> f32 {
        self.y
    }

    pub fn b(self) -> f32 {
        self.z
    }

    pub fn a(self) -> f32 {
        self.w
    }
}

/// Shared square-matrix implementation over `$n` columns of `$col`.
macro_rules! impl_matrix {
    ($name:ident, $col:ident, $n:expr) => {
        impl $name {
            pub const ZERO: $name = $name { cols: [$col::ZERO; $n] };
            pub const IDENTITY: $name = $name::from_diagonal(1.0);

            /// Diagonal matrix with `v` on the diagonal (identity for `v == 1`)
            pub const fn from_diagonal(v: f32) -> Self {
                let mut cols = [$col::ZERO; $n];
                let mut i = 0;
                while i < $n {
                    let mut arr = [0.0f32; $n];
                    arr[i] = v;
                    cols[i] = $col::from_array_const(arr);
                    i += 1;
                }
                Self { cols }
            }

            pub const fn from_cols(cols: [$col; $n]) -> Self {
                Self { cols }
            }

            pub fn col(&self, i: usize) -> $col {
                self.cols[i]
            }

            /// Row `r` gathered across the columns
            pub fn row(&self, r: usize) -> $col {
                let mut ret = $col::ZERO;
                for c in 0..$n {
                    ret[c] = self.cols[c][r];
                }
                ret
            }

            pub fn transpose(&self) -> $name {
                let mut ret = $name::ZERO;
                for i in 0..$n {
                    for j in 0..$n {
                        ret[i][j] = self[j][i];
                    }
                }
                ret
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::IDENTITY
            }
        }

        impl Index<usize> for $name {
            type Output = $col;
            fn index(&self, i: usize) -> &$col {
                assert!(i < $n, "{} column {} out of range", stringify!($name), i);
                &self.cols[i]
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, i: usize) -> &mut $col {
                assert!(i < $n, "{} column {} out of range", stringify!($name), i);
                &mut self.cols[i]
            }
        }

        /// Standard product: `(A * B) * v == A * (B * v)`
        impl Mul for $name {
            type Output = $name;
            fn mul(self, m: $name) -> $name {
                let mut ret = $name::ZERO;
                for i in 0..$n {
                    for j in 0..$n {
                        for k in 0..$n {
                            ret[j][i] += self[k][i] * m[j][k];
                        }
                    }
                }
                ret
            }
        }

        /// Matrix times column vector
        impl Mul<$col> for $name {
            type Output = $col;
            fn mul(self, v: $col) -> $col {
                let mut ret = $col::ZERO;
                for i in 0..$n {
                    for j in 0..$n {
                        ret[i] += self[j][i] * v[j];
                    }
                }
                ret
            }
        }

        /// Row vector times matrix
        impl Mul<$name> for $col {
            type Output = $col;
            fn mul(self, m: $name) -> $col {
                let mut ret = $col::ZERO;
                for i in 0..$n {
                    for j in 0..$n {
                        ret[j] += self[i] * m[j][i];
                    }
                }
                ret
            }
        }

        impl Mul<f32> for $name {
            type Output = $name;
            fn mul(self, s: f32) -> $name {
                let mut ret = self;
                for c in ret.cols.iter_mut() {
                    *c *= s;
                }
                ret
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, m: $name) -> $name {
                let mut ret = self;
                for (c, o) in ret.cols.iter_mut().zip(m.cols.iter()) {
                    *c += *o;
                }
                ret
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, m: $name) -> $name {
                let mut ret = self;
                for (c, o) in ret.cols.iter_mut().zip(m.cols.iter()) {
                    *c -= *o;
                }
                ret
            }
        }
    };
}

impl Vec2 {
    const fn from_array_const(a: [f32; 2]) -> Self {
        Self { x: a[0], y: a[1] }
    }
}

impl Vec3 {
    const fn from_array_const(a: [f32; 3]) -> Self {
        Self { x: a[0], y: a[1], z: a[2] }
    }
}

impl Vec4 {
    const fn from_array_const(a: [f32; 4]) -> Self {
        Self { x: a[0], y: a[1], z: a[2], w: a[3] }
    }
}

/// 2x2 column-major matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub cols: [Vec2; 2],
}

impl_matrix!(Mat2, Vec2, 2);

impl Mat2 {
    pub fn scale(s: f32) -> Self {
        Self::from_diagonal(s)
    }

    /// Columns `(cos, -sin)` and `(sin, cos)`: positive angles turn clockwise
    /// in a y-down framebuffer.
    pub fn rotation(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        Self::from_cols([Vec2::new(c, -s), Vec2::new(s, c)])
    }

    /// x' = x + k*y
    pub fn shear_x(k: f32) -> Self {
        Self::from_cols([Vec2::new(1.0, 0.0), Vec2::new(k, 1.0)])
    }

    /// y' = y + k*x
    pub fn shear_y(k: f32) -> Self {
        Self::from_cols([Vec2::new(1.0, k), Vec2::new(0.0, 1.0)])
    }
}

/// 3x3 column-major matrix (also used for 2D affine transforms)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub cols: [Vec3; 3],
}

impl_matrix!(Mat3, Vec3, 3);

impl Mat3 {
    pub fn scale_2d(sx: f32, sy: f32) -> Self {
        Self::from_cols([
            Vec3::new(sx, 0.0, 0.0),
            Vec3::new(0.0, sy, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ])
    }

    pub fn rotation_2d(rad: f32) -> Self {
        let (s, c) = rad.sin_cos();
        Self::from_cols([
            Vec3::new(c, s, 0.0),
            Vec3::new(-s, c, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ])
    }

    pub fn translation_2d(tx: f32, ty: f32) -> Self {
        Self::from_cols([
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(tx, ty, 1.0),
        ])
    }
}

/// 4x4 column-major matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub cols: [Vec4; 4],
}

impl_matrix!(Mat4, Vec4, 4);

impl Mat4 {
    /// `self * T(v)`
    pub fn translate(&self, v: Vec3) -> Mat4 {
        let mut ret = *self;
        ret[3] = self[0] * v.x + self[1] * v.y + self[2] * v.z + self[3];
        ret
    }

    /// `self * S(v)`
    pub fn scale(&self, v: Vec3) -> Mat4 {
        Mat4::from_cols([self[0] * v.x, self[1] * v.y, self[2] * v.z, self[3]])
    }

    /// `self * R(angle, axis)`, Rodrigues rotation about a (normalized) axis
    pub fn rotate(&self, angle: f32, axis: Vec3) -> Mat4 {
        let (sa, ca) = angle.sin_cos();
        let a = axis.normalize();
        let t = a * (1.0 - ca);

        let r0 = Vec3::new(ca + t.x * a.x, t.x * a.y + sa * a.z, t.x * a.z - sa * a.y);
        let r1 = Vec3::new(t.y * a.x - sa * a.z, ca + t.y * a.y, t.y * a.z + sa * a.x);
        let r2 = Vec3::new(t.z * a.x + sa * a.y, t.z * a.y - sa * a.x, ca + t.z * a.z);

        Mat4::from_cols([
            self[0] * r0.x + self[1] * r0.y + self[2] * r0.z,
            self[0] * r1.x + self[1] * r1.y + self[2] * r1.z,
            self[0] * r2.x + self[1] * r2.y + self[2] * r2.z,
            self[3],
        ])
    }

    /// Left-handed view matrix looking from `eye` toward `center` (+Z forward)
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
        let za = (center - eye).normalize();
        let xa = up.cross(za).normalize();
        let ya = za.cross(xa);

        let mut ret = Mat4::ZERO;
        for i in 0..3 {
            ret[i][0] = xa[i];
            ret[i][1] = ya[i];
            ret[i][2] = za[i];
        }
        ret[3] = Vec4::new(-eye.dot(xa), -eye.dot(ya), -eye.dot(za), 1.0);
        ret
    }

    /// OpenGL-style perspective projection (`fovy` in radians)
    pub fn perspective(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
        let d = 1.0 / (fovy * 0.5).tan();
        let inv_nf = 1.0 / (z_near - z_far);
        let k = (z_near + z_far) * inv_nf;
        let l = 2.0 * z_near * z_far * inv_nf;
        Mat4::from_cols([
            Vec4::new(d / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, d, 0.0, 0.0),
            Vec4::new(0.0, 0.0, k, -1.0),
            Vec4::new(0.0, 0.0, l, 0.0),
        ])
    }

    /// Transform a point (w = 1) and drop w without dividing
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(p, 1.0)).xyz()
    }
}

/// Rotate `v` by yaw (about Y), then pitch (about X), then roll (about Z).
///
/// Positive yaw turns +Z toward +X and positive pitch tilts +Z toward +Y,
/// matching `Camera::forward`, so negated angles give the view transform.
pub fn rotate_yaw_pitch_roll(v: Vec3, yaw: f32, pitch: f32, roll: f32) -> Vec3 {
    let (sy, cy) = yaw.sin_cos();
    let (sx, cx) = pitch.sin_cos();
    let (sz, cz) = roll.sin_cos();

    let vy = Vec3::new(cy * v.x + sy * v.z, v.y, -sy * v.x + cy * v.z);
    let vp = Vec3::new(vy.x, cx * vy.y + sx * vy.z, -sx * vy.y + cx * vy.z);
    Vec3::new(cz * vp.x - sz * vp.y, sz * vp.x + cz * vp.y, vp.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn mat_close3(a: &Mat3, b: &Mat3) -> bool {
        (0..3).all(|c| (0..3).all(|r| close(a[c][r], b[c][r])))
    }

    fn mat_close4(a: &Mat4, b: &Mat4) -> bool {
        (0..4).all(|c| (0..4).all(|r| (a[c][r] - b[c][r]).abs() < 1e-2))
    }

    /// Small deterministic LCG so the associativity checks cover varied inputs
    struct Lcg(u32);

    impl Lcg {
        fn next(&mut self) -> f32 {
            self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (self.0 >> 8) as f32 / (1u32 << 24) as f32 * 4.0 - 2.0
        }

        fn mat3(&mut self) -> Mat3 {
            let mut m = Mat3::ZERO;
            for c in 0..3 {
                for r in 0..3 {
                    m[c][r] = self.next();
                }
            }
            m
        }

        fn mat4(&mut self) -> Mat4 {
            let mut m = Mat4::ZERO;
            for c in 0..4 {
                for r in 0..4 {
                    m[c][r] = self.next();
                }
            }
            m
        }
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!(close(a.dot(b), 32.0));
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let c = a.cross(b);
        assert!(close(c.z, 1.0));
        assert!(close(c.x, 0.0) && close(c.y, 0.0));
    }

    #[test]
    fn test_length_and_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert!(close(v.length(), 5.0));
        let n = v.normalize();
        assert!(close(n.x, 0.6) && close(n.y, 0.8));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let vs = [
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(0.001, 0.0, 0.0),
            Vec3::new(-40.0, 12.0, 9.0),
        ];
        for v in vs {
            let once = v.normalize();
            let twice = once.normalize();
            assert!(close(once.x, twice.x) && close(once.y, twice.y) && close(once.z, twice.z));
            assert!(close(once.length(), 1.0));
        }
    }

    #[test]
    fn test_normalize_zero_is_unchanged() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_eq!(Vec4::ZERO.normalize(), Vec4::ZERO);
        assert!(!Vec2::ZERO.normalize().x.is_nan());
    }

    #[test]
    fn test_color_accessors_alias_positions() {
        let v = Vec4::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(v.r(), v.x);
        assert_eq!(v.g(), v[1]);
        assert_eq!(v.b(), v[2]);
        assert_eq!(v.a(), v.w);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn test_radians_degrees_round_trip() {
        for deg in [-720.0, -90.0, 0.0, 45.0, 180.0, 359.0] {
            assert!((degrees(radians(deg)) - deg).abs() < 1e-3);
        }
        assert!(close(radians(180.0), PI));
    }

    #[test]
    fn test_identity_is_neutral() {
        let mut rng = Lcg(7);
        let a = rng.mat4();
        assert!(mat_close4(&(Mat4::IDENTITY * a), &a));
        assert!(mat_close4(&(a * Mat4::IDENTITY), &a));

        let b = rng.mat3();
        assert!(mat_close3(&(Mat3::IDENTITY * b), &b));
        assert!(mat_close3(&(b * Mat3::IDENTITY), &b));
    }

    #[test]
    fn test_matrix_product_is_associative() {
        let mut rng = Lcg(42);
        for _ in 0..16 {
            let (a, b, c) = (rng.mat3(), rng.mat3(), rng.mat3());
            assert!(mat_close3(&((a * b) * c), &(a * (b * c))));

            let (a, b, c) = (rng.mat4(), rng.mat4(), rng.mat4());
            assert!(mat_close4(&((a * b) * c), &(a * (b * c))));
        }
    }

    #[test]
    fn test_matrix_product_is_standard() {
        // Columns (1,3) and (2,4) -> rows [1 2; 3 4]
        let a = Mat2::from_cols([Vec2::new(1.0, 3.0), Vec2::new(2.0, 4.0)]);
        // Rows [5 6; 7 8]
        let b = Mat2::from_cols([Vec2::new(5.0, 7.0), Vec2::new(6.0, 8.0)]);
        let ab = a * b;
        // Rows [19 22; 43 50]
        assert_eq!(ab.row(0), Vec2::new(19.0, 22.0));
        assert_eq!(ab.row(1), Vec2::new(43.0, 50.0));
    }

    #[test]
    fn test_matrix_vector_conventions() {
        let a = Mat2::from_cols([Vec2::new(1.0, 3.0), Vec2::new(2.0, 4.0)]);
        let v = Vec2::new(1.0, 1.0);
        // Column vector: row sums
        assert_eq!(a * v, Vec2::new(3.0, 7.0));
        // Row vector: column sums
        assert_eq!(v * a, Vec2::new(4.0, 6.0));
        assert_eq!(v * a, a.transpose() * v);
    }

    #[test]
    fn test_composition_order_matters() {
        let r = Mat3::rotation_2d(radians(90.0));
        let t = Mat3::translation_2d(10.0, 0.0);
        let p = Vec3::new(1.0, 0.0, 1.0);

        // Rotate then translate
        let rt = (t * r) * p;
        assert!(close(rt.x, 10.0) && close(rt.y, 1.0));
        // Translate then rotate
        let tr = (r * t) * p;
        assert!(close(tr.x, 0.0) && close(tr.y, 11.0));
    }

    #[test]
    fn test_transpose_twice_is_identity_op() {
        let mut rng = Lcg(3);
        let m = rng.mat4();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose()[1][2], m[2][1]);
    }

    #[test]
    fn test_mat4_translate_scale_rotate() {
        let m = Mat4::IDENTITY
            .translate(Vec3::new(1.0, 2.0, 3.0))
            .scale(Vec3::splat(2.0));
        let p = m.transform_point(Vec3::new(1.0, 1.0, 1.0));
        assert!(close(p.x, 3.0) && close(p.y, 4.0) && close(p.z, 5.0));

        let r = Mat4::IDENTITY.rotate(radians(90.0), Vec3::new(0.0, 0.0, 1.0));
        let q = r.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(close(q.x, 0.0) && close(q.y, 1.0));
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, -5.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UP);
        let e = view.transform_point(eye);
        assert!(close(e.length(), 0.0));
        let target = view.transform_point(Vec3::ZERO);
        assert!(close(target.z, 5.0));
    }

    #[test]
    fn test_perspective_maps_near_plane_to_minus_one() {
        let p = Mat4::perspective(radians(60.0), 1.0, 0.1, 100.0);
        let clip = p * Vec4::new(0.0, 0.0, -0.1, 1.0);
        assert!(close(clip.z / clip.w, -1.0));
    }

    #[test]
    fn test_rotate_yaw_quarter_turn() {
        let v = rotate_yaw_pitch_roll(Vec3::new(0.0, 0.0, 1.0), radians(90.0), 0.0, 0.0);
        assert!(close(v.x, 1.0) && close(v.z, 0.0));
        let p = rotate_yaw_pitch_roll(Vec3::new(0.0, 0.0, 1.0), 0.0, radians(90.0), 0.0);
        assert!(close(p.y, 1.0) && close(p.z, 0.0));
    }
}
