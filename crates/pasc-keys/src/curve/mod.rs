//! Curve resolution and scalar base-point multiplication.
//!
//! Maps registered key types onto concrete curve implementations (k256 for
//! secp256k1, p384 and p521 for the NIST curves) and hides the per-curve
//! generic arithmetic behind the `Curve` enum.

use k256::elliptic_curve::bigint::ArrayEncoding;
use k256::elliptic_curve::group::{Curve as _, Group};
use k256::elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use k256::elliptic_curve::{
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, PublicKey, SecretKey,
};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::key_type::KeyType;
use crate::KeyError;

/// Tag byte of an uncompressed SEC1 point.
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// An affine curve point as big-endian, fixed-width coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurvePoint {
    /// X coordinate.
    pub x: Vec<u8>,
    /// Y coordinate.
    pub y: Vec<u8>,
}

/// A curve with implemented arithmetic.
///
/// The curve parameters themselves live in the backing crates as constants;
/// this type only selects between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    /// secp256k1, via `k256`.
    Secp256k1,
    /// NIST P-384, via `p384`.
    Secp384r1,
    /// NIST P-521, via `p521`.
    Secp521r1,
}

/// Resolve the curve for a raw key type code.
///
/// # Arguments
/// * `code` - The numeric key type code.
///
/// # Returns
/// The matching `Curve`. Code 729 (sect283k1) fails with
/// `KeyError::UnsupportedCurve`; codes outside the registry fail with
/// `KeyError::UnknownKeyType` carrying the code.
pub fn resolve_curve(code: i32) -> Result<Curve, KeyError> {
    let key_type = KeyType::from_code(code).map_err(|_| KeyError::UnknownKeyType(code))?;
    key_type.curve()
}

impl Curve {
    /// The key type this curve backs.
    pub fn key_type(self) -> KeyType {
        match self {
            Curve::Secp256k1 => KeyType::Secp256k1,
            Curve::Secp384r1 => KeyType::Secp384r1,
            Curve::Secp521r1 => KeyType::Secp521r1,
        }
    }

    /// Standard curve name.
    pub fn name(self) -> &'static str {
        self.key_type().name()
    }

    /// Width in bytes of a field element, and so of each point coordinate.
    pub fn coordinate_len(self) -> usize {
        match self {
            Curve::Secp256k1 => 32,
            Curve::Secp384r1 => 48,
            Curve::Secp521r1 => 66,
        }
    }

    /// Group order as minimal big-endian bytes.
    pub fn order(self) -> Vec<u8> {
        match self {
            Curve::Secp256k1 => order_of::<k256::Secp256k1>(),
            Curve::Secp384r1 => order_of::<p384::NistP384>(),
            Curve::Secp521r1 => order_of::<p521::NistP521>(),
        }
    }

    /// Coordinates of the base point.
    pub fn generator(self) -> CurvePoint {
        match self {
            Curve::Secp256k1 => generator_of::<k256::Secp256k1>(),
            Curve::Secp384r1 => generator_of::<p384::NistP384>(),
            Curve::Secp521r1 => generator_of::<p521::NistP521>(),
        }
    }

    /// Draw a random non-zero scalar below the group order and compute its
    /// public point.
    ///
    /// A fresh `OsRng` handle is used on every call.
    ///
    /// # Returns
    /// The scalar as full-width big-endian bytes, and the public point.
    pub(crate) fn generate(self) -> Result<(Zeroizing<Vec<u8>>, CurvePoint), KeyError> {
        match self {
            Curve::Secp256k1 => generate_on::<k256::Secp256k1>(),
            Curve::Secp384r1 => generate_on::<p384::NistP384>(),
            Curve::Secp521r1 => generate_on::<p521::NistP521>(),
        }
    }

    /// Multiply the base point by a big-endian scalar.
    ///
    /// The scalar is used as-is: no hashing, no reduction mod the order.
    /// Any length is accepted as long as the value fits the field width, so
    /// short scalars and sign-padded ones with extra leading zero bytes
    /// name the same key as their full-width form.
    ///
    /// # Arguments
    /// * `scalar` - Big-endian scalar bytes.
    ///
    /// # Returns
    /// The public point, or `KeyError::InvalidPrivateKey` when the scalar is
    /// zero, wider than the field, or not below the order.
    pub(crate) fn mul_base(self, scalar: &[u8]) -> Result<CurvePoint, KeyError> {
        let leading = scalar.iter().take_while(|b| **b == 0).count();
        let significant = &scalar[leading..];
        if significant.is_empty() {
            return Err(KeyError::InvalidPrivateKey("scalar is zero".to_string()));
        }
        if significant.len() > self.coordinate_len() {
            return Err(KeyError::InvalidPrivateKey(format!(
                "scalar of {} significant bytes exceeds the {}-byte {} field",
                significant.len(),
                self.coordinate_len(),
                self.name()
            )));
        }
        match self {
            Curve::Secp256k1 => mul_base_on::<k256::Secp256k1>(significant, self),
            Curve::Secp384r1 => mul_base_on::<p384::NistP384>(significant, self),
            Curve::Secp521r1 => mul_base_on::<p521::NistP521>(significant, self),
        }
    }

    /// Check that a point has the right coordinate width and lies on this
    /// curve.
    ///
    /// # Returns
    /// `KeyError::MalformedPoint` on a width mismatch, `KeyError::PointNotOnCurve`
    /// otherwise if the coordinates do not satisfy the curve equation.
    pub fn check_point(self, point: &CurvePoint) -> Result<(), KeyError> {
        let expected = self.coordinate_len();
        for coord in [&point.x, &point.y] {
            if coord.len() != expected {
                return Err(KeyError::MalformedPoint {
                    expected,
                    got: coord.len(),
                });
            }
        }

        let mut sec1 = Vec::with_capacity(1 + 2 * expected);
        sec1.push(SEC1_UNCOMPRESSED_TAG);
        sec1.extend_from_slice(&point.x);
        sec1.extend_from_slice(&point.y);

        match self {
            Curve::Secp256k1 => check_on::<k256::Secp256k1>(&sec1),
            Curve::Secp384r1 => check_on::<p384::NistP384>(&sec1),
            Curve::Secp521r1 => check_on::<p521::NistP521>(&sec1),
        }
    }
}

fn order_of<C: k256::elliptic_curve::Curve>() -> Vec<u8> {
    let array = C::ORDER.to_be_byte_array();
    let bytes: &[u8] = array.as_ref();
    let leading = bytes.iter().take_while(|b| **b == 0).count();
    bytes[leading..].to_vec()
}

fn generator_of<C>() -> CurvePoint
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let affine = C::ProjectivePoint::generator().to_affine();
    let public = PublicKey::<C>::from_affine(affine)
        .expect("the generator is never the identity");
    coordinates_of(&public).expect("the generator has affine coordinates")
}

fn generate_on<C>() -> Result<(Zeroizing<Vec<u8>>, CurvePoint), KeyError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = SecretKey::<C>::random(&mut OsRng);
    let point = coordinates_of(&secret.public_key())?;
    let bytes = Zeroizing::new(secret.to_bytes());
    Ok((Zeroizing::new(bytes.to_vec()), point))
}

// `scalar` has no leading zeros and fits the field width.
fn mul_base_on<C>(scalar: &[u8], curve: Curve) -> Result<CurvePoint, KeyError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let mut padded = Zeroizing::new(FieldBytes::<C>::default());
    let buf: &mut [u8] = &mut padded;
    let offset = buf.len() - scalar.len();
    buf[offset..].copy_from_slice(scalar);
    let secret = SecretKey::<C>::from_bytes(&padded).map_err(|_| {
        KeyError::InvalidPrivateKey(format!(
            "scalar is zero or not below the {} group order",
            curve.name()
        ))
    })?;
    coordinates_of(&secret.public_key())
}

fn check_on<C>(sec1: &[u8]) -> Result<(), KeyError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    PublicKey::<C>::from_sec1_bytes(sec1)
        .map(|_| ())
        .map_err(|_| KeyError::PointNotOnCurve)
}

fn coordinates_of<C>(public: &PublicKey<C>) -> Result<CurvePoint, KeyError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let encoded = public.to_encoded_point(false);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => Ok(CurvePoint {
            x: x.to_vec(),
            y: y.to_vec(),
        }),
        _ => Err(KeyError::PointNotOnCurve),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECP256K1_GX: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const SECP256K1_GY: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";
    const SECP256K1_N: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
    const P384_N: &str = "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973";

    /// Registered curves resolve; sect283k1 and unknown codes fail distinctly.
    #[test]
    fn test_resolve_curve() {
        assert_eq!(resolve_curve(714), Ok(Curve::Secp256k1));
        assert_eq!(resolve_curve(715), Ok(Curve::Secp384r1));
        assert_eq!(resolve_curve(716), Ok(Curve::Secp521r1));
        assert_eq!(resolve_curve(729), Err(KeyError::UnsupportedCurve("sect283k1")));
        for code in [0, -1, 9999] {
            assert_eq!(resolve_curve(code), Err(KeyError::UnknownKeyType(code)));
        }
    }

    #[test]
    fn test_unknown_key_type_message_has_code() {
        let err = resolve_curve(9999).unwrap_err();
        assert!(err.to_string().contains("9999"));
    }

    /// Known-answer check on the secp256k1 and P-384 parameters.
    #[test]
    fn test_curve_constants() {
        let g = Curve::Secp256k1.generator();
        assert_eq!(hex::encode(&g.x), SECP256K1_GX);
        assert_eq!(hex::encode(&g.y), SECP256K1_GY);
        assert_eq!(hex::encode(Curve::Secp256k1.order()), SECP256K1_N);
        assert_eq!(hex::encode(Curve::Secp384r1.order()), P384_N);

        let p521_order = Curve::Secp521r1.order();
        assert_eq!(p521_order.len(), 66);
        assert_eq!(p521_order[0], 0x01);
    }

    /// The scalar one maps to the generator on every curve.
    #[test]
    fn test_mul_base_by_one_is_generator() {
        for curve in [Curve::Secp256k1, Curve::Secp384r1, Curve::Secp521r1] {
            let mut one = vec![0u8; curve.coordinate_len()];
            *one.last_mut().unwrap() = 1;
            assert_eq!(curve.mul_base(&one).unwrap(), curve.generator(), "{}", curve.name());
        }
    }

    /// Short scalars are left-padded before multiplication.
    #[test]
    fn test_mul_base_short_scalar() {
        let mut short = vec![0u8; 32];
        short[31] = 1;
        assert_eq!(
            Curve::Secp521r1.mul_base(&short).unwrap(),
            Curve::Secp521r1.generator()
        );
        for curve in [Curve::Secp256k1, Curve::Secp384r1, Curve::Secp521r1] {
            assert_eq!(curve.mul_base(&[0x01]).unwrap(), curve.generator());
        }

        let scalar: Vec<u8> = (1u8..=16).collect();
        let mut wide = vec![0u8; 48];
        wide[32..].copy_from_slice(&scalar);
        assert_eq!(
            Curve::Secp384r1.mul_base(&scalar).unwrap(),
            Curve::Secp384r1.mul_base(&wide).unwrap()
        );
    }

    /// Extra leading zero bytes beyond the field width are ignored.
    #[test]
    fn test_mul_base_sign_padded_scalar() {
        let scalar: Vec<u8> = (0x80u8..0xa0).collect();
        let mut signed = vec![0x00];
        signed.extend_from_slice(&scalar);
        assert_eq!(signed.len(), 33);
        assert_eq!(
            Curve::Secp256k1.mul_base(&signed).unwrap(),
            Curve::Secp256k1.mul_base(&scalar).unwrap()
        );
    }

    #[test]
    fn test_mul_base_rejects_bad_scalars() {
        let curve = Curve::Secp256k1;
        assert!(matches!(curve.mul_base(&[]), Err(KeyError::InvalidPrivateKey(_))));
        assert!(matches!(curve.mul_base(&[0u8; 32]), Err(KeyError::InvalidPrivateKey(_))));
        assert!(matches!(curve.mul_base(&[0u8; 40]), Err(KeyError::InvalidPrivateKey(_))));
        assert!(matches!(curve.mul_base(&[0xffu8; 32]), Err(KeyError::InvalidPrivateKey(_))));
        assert!(matches!(curve.mul_base(&[1u8; 33]), Err(KeyError::InvalidPrivateKey(_))));

        let order = curve.order();
        assert!(curve.mul_base(&order).is_err());
    }

    #[test]
    fn test_generate_produces_points_on_curve() {
        for curve in [Curve::Secp256k1, Curve::Secp384r1, Curve::Secp521r1] {
            let (scalar, point) = curve.generate().unwrap();
            assert_eq!(scalar.len(), curve.coordinate_len());
            curve.check_point(&point).unwrap();
            assert_eq!(curve.mul_base(&scalar).unwrap(), point);
        }
    }

    #[test]
    fn test_check_point() {
        let curve = Curve::Secp256k1;
        let g = curve.generator();
        assert!(curve.check_point(&g).is_ok());

        let mut off_curve = g.clone();
        off_curve.y[31] ^= 0x01;
        assert_eq!(curve.check_point(&off_curve), Err(KeyError::PointNotOnCurve));

        let short = CurvePoint {
            x: g.x[1..].to_vec(),
            y: g.y.clone(),
        };
        assert_eq!(
            curve.check_point(&short),
            Err(KeyError::MalformedPoint { expected: 32, got: 31 })
        );

        // A secp256k1 point is the wrong width for P-384.
        assert_eq!(
            Curve::Secp384r1.check_point(&g),
            Err(KeyError::MalformedPoint { expected: 48, got: 32 })
        );
    }
}
