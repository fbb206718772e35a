//! Curve Parameters
//!
//! Domain parameters as supplied by the caller, before validation, and the
//! SEC 2 recommended parameter sets (SEC 2 v1 for the 112/128-bit curves,
//! SEC 2 v2 for the rest). Build a [`Curve`](super::Curve) from them with
//! [`Curve::new`](super::Curve::new).
//!
//! Integers serialize as `0x`-prefixed hex strings.

use ruint::uint;
use serde::{Deserialize, Serialize};

use crate::field::U576;

/// Unvalidated elliptic curve domain parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveParams {
    /// Field prime
    pub p: U576,
    /// Curve coefficient a
    pub a: U576,
    /// Curve coefficient b
    pub b: U576,
    /// Generator (x, y)
    pub g: (U576, U576),
    /// Order of the generator
    pub n: U576,
    /// Cofactor
    pub h: U576,
    /// Claimed security level; 0 skips the security checks
    pub sec_bits: u32,
    /// Reject curves with embedding degree below 100
    #[serde(default = "default_weakness_check")]
    pub weakness_check: bool,
}

fn default_weakness_check() -> bool {
    true
}

impl CurveParams {
    /// Parse parameters from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize parameters to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Look up a SEC 2 parameter set by its lower-case name, e.g. `"secp256k1"`.
    pub fn by_name(name: &str) -> Option<&'static CurveParams> {
        NAMED_CURVES
            .iter()
            .find(|(curve_name, _)| *curve_name == name)
            .map(|(_, params)| *params)
    }
}

/// All named parameter sets
pub const NAMED_CURVES: &[(&str, &CurveParams)] = &[
    ("secp112r1", &SECP112R1),
    ("secp112r2", &SECP112R2),
    ("secp128r1", &SECP128R1),
    ("secp128r2", &SECP128R2),
    ("secp160k1", &SECP160K1),
    ("secp160r1", &SECP160R1),
    ("secp160r2", &SECP160R2),
    ("secp192k1", &SECP192K1),
    ("secp192r1", &SECP192R1),
    ("secp224k1", &SECP224K1),
    ("secp224r1", &SECP224R1),
    ("secp256k1", &SECP256K1),
    ("secp256r1", &SECP256R1),
    ("secp384r1", &SECP384R1),
    ("secp521r1", &SECP521R1),
];

uint! {
    /// SEC 2 v1 secp112r1 (p = (2^128 - 3) / 76439)
    pub const SECP112R1: CurveParams = CurveParams {
        p: 0xdb7c2abf62e35e668076bead208b_U576,
        a: 0xdb7c2abf62e35e668076bead2088_U576,
        b: 0x659ef8ba043916eede8911702b22_U576,
        g: (
            0x9487239995a5ee76b55f9c2f098_U576,
            0xa89ce5af8724c0a23e0e0ff77500_U576,
        ),
        n: 0xdb7c2abf62e35e7628dfac6561c5_U576,
        h: 1_U576,
        sec_bits: 56,
        weakness_check: true,
    };

    /// SEC 2 v1 secp112r2, cofactor 4
    pub const SECP112R2: CurveParams = CurveParams {
        p: 0xdb7c2abf62e35e668076bead208b_U576,
        a: 0x6127c24c05f38a0aaaf65c0ef02c_U576,
        b: 0x51def1815db5ed74fcc34c85d709_U576,
        g: (
            0x4ba30ab5e892b4e1649dd0928643_U576,
            0xadcd46f5882e3747def36e956e97_U576,
        ),
        n: 0x36df0aafd8b8d7597ca10520d04b_U576,
        h: 4_U576,
        sec_bits: 56,
        weakness_check: true,
    };

    /// SEC 2 v1 secp128r1 (p = 2^128 - 2^97 - 1)
    pub const SECP128R1: CurveParams = CurveParams {
        p: 0xfffffffdffffffffffffffffffffffff_U576,
        a: 0xfffffffdfffffffffffffffffffffffc_U576,
        b: 0xe87579c11079f43dd824993c2cee5ed3_U576,
        g: (
            0x161ff7528b899b2d0c28607ca52c5b86_U576,
            0xcf5ac8395bafeb13c02da292dded7a83_U576,
        ),
        n: 0xfffffffe0000000075a30d1b9038a115_U576,
        h: 1_U576,
        sec_bits: 64,
        weakness_check: true,
    };

    /// SEC 2 v1 secp128r2, cofactor 4
    pub const SECP128R2: CurveParams = CurveParams {
        p: 0xfffffffdffffffffffffffffffffffff_U576,
        a: 0xd6031998d1b3bbfebf59cc9bbff9aee1_U576,
        b: 0x5eeefca380d02919dc2c6558bb6d8a5d_U576,
        g: (
            0x7b6aa5d85e572983e6fb32a7cdebc140_U576,
            0x27b6916a894d3aee7106fe805fc34b44_U576,
        ),
        n: 0x3fffffff7fffffffbe0024720613b5a3_U576,
        h: 4_U576,
        sec_bits: 64,
        weakness_check: true,
    };

    /// SEC 2 secp160k1 (Koblitz)
    pub const SECP160K1: CurveParams = CurveParams {
        p: 0xfffffffffffffffffffffffffffffffeffffac73_U576,
        a: 0_U576,
        b: 7_U576,
        g: (
            0x3b4c382ce37aa192a4019e763036f4f5dd4d7ebb_U576,
            0x938cf935318fdced6bc28286531733c3f03c4fee_U576,
        ),
        n: 0x100000000000000000001b8fa16dfab9aca16b6b3_U576,
        h: 1_U576,
        sec_bits: 80,
        weakness_check: true,
    };

    /// SEC 2 secp160r1 (p = 2^160 - 2^31 - 1)
    pub const SECP160R1: CurveParams = CurveParams {
        p: 0xffffffffffffffffffffffffffffffff7fffffff_U576,
        a: 0xffffffffffffffffffffffffffffffff7ffffffc_U576,
        b: 0x1c97befc54bd7a8b65acf89f81d4d4adc565fa45_U576,
        g: (
            0x4a96b5688ef573284664698968c38bb913cbfc82_U576,
            0x23a628553168947d59dcc912042351377ac5fb32_U576,
        ),
        n: 0x100000000000000000001f4c8f927aed3ca752257_U576,
        h: 1_U576,
        sec_bits: 80,
        weakness_check: true,
    };

    /// SEC 2 secp160r2
    pub const SECP160R2: CurveParams = CurveParams {
        p: 0xfffffffffffffffffffffffffffffffeffffac73_U576,
        a: 0xfffffffffffffffffffffffffffffffeffffac70_U576,
        b: 0xb4e134d3fb59eb8bab57274904664d5af50388ba_U576,
        g: (
            0x52dcb034293a117e1f4ff11b30f7199d3144ce6d_U576,
            0xfeaffef2e331f296e071fa0df9982cfea7d43f2e_U576,
        ),
        n: 0x100000000000000000000351ee786a818f3a1a16b_U576,
        h: 1_U576,
        sec_bits: 80,
        weakness_check: true,
    };

    /// SEC 2 secp192k1 (Koblitz)
    pub const SECP192K1: CurveParams = CurveParams {
        p: 0xfffffffffffffffffffffffffffffffffffffffeffffee37_U576,
        a: 0_U576,
        b: 3_U576,
        g: (
            0xdb4ff10ec057e9ae26b07d0280b7f4341da5d1b1eae06c7d_U576,
            0x9b2f2f6d9c5628a7844163d015be86344082aa88d95e2f9d_U576,
        ),
        n: 0xfffffffffffffffffffffffe26f2fc170f69466a74defd8d_U576,
        h: 1_U576,
        sec_bits: 96,
        weakness_check: true,
    };

    /// SEC 2 secp192r1, also NIST P-192
    pub const SECP192R1: CurveParams = CurveParams {
        p: 0xfffffffffffffffffffffffffffffffeffffffffffffffff_U576,
        a: 0xfffffffffffffffffffffffffffffffefffffffffffffffc_U576,
        b: 0x64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1_U576,
        g: (
            0x188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012_U576,
            0x7192b95ffc8da78631011ed6b24cdd573f977a11e794811_U576,
        ),
        n: 0xffffffffffffffffffffffff99def836146bc9b1b4d22831_U576,
        h: 1_U576,
        sec_bits: 96,
        weakness_check: true,
    };

    /// SEC 2 secp224k1 (Koblitz); p ≡ 1 (mod 4)
    pub const SECP224K1: CurveParams = CurveParams {
        p: 0xfffffffffffffffffffffffffffffffffffffffffffffffeffffe56d_U576,
        a: 0_U576,
        b: 5_U576,
        g: (
            0xa1455b334df099df30fc28a169a467e9e47075a90f7e650eb6b7a45c_U576,
            0x7e089fed7fba344282cafbd6f7e319f7c0b0bd59e2ca4bdb556d61a5_U576,
        ),
        n: 0x10000000000000000000000000001dce8d2ec6184caf0a971769fb1f7_U576,
        h: 1_U576,
        sec_bits: 112,
        weakness_check: true,
    };

    /// SEC 2 secp224r1, also NIST P-224; p ≡ 1 (mod 4)
    pub const SECP224R1: CurveParams = CurveParams {
        p: 0xffffffffffffffffffffffffffffffff000000000000000000000001_U576,
        a: 0xfffffffffffffffffffffffffffffffefffffffffffffffffffffffe_U576,
        b: 0xb4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4_U576,
        g: (
            0xb70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21_U576,
            0xbd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34_U576,
        ),
        n: 0xffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d_U576,
        h: 1_U576,
        sec_bits: 112,
        weakness_check: true,
    };

    /// SEC 2 secp256k1 (Koblitz), used by Bitcoin (p = 2^256 - 2^32 - 977)
    pub const SECP256K1: CurveParams = CurveParams {
        p: 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f_U576,
        a: 0_U576,
        b: 7_U576,
        g: (
            0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798_U576,
            0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8_U576,
        ),
        n: 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141_U576,
        h: 1_U576,
        sec_bits: 128,
        weakness_check: true,
    };

    /// SEC 2 secp256r1, also NIST P-256
    pub const SECP256R1: CurveParams = CurveParams {
        p: 0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff_U576,
        a: 0xffffffff00000001000000000000000000000000fffffffffffffffffffffffc_U576,
        b: 0x5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b_U576,
        g: (
            0x6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296_U576,
            0x4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5_U576,
        ),
        n: 0xffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551_U576,
        h: 1_U576,
        sec_bits: 128,
        weakness_check: true,
    };

    /// SEC 2 secp384r1, also NIST P-384
    pub const SECP384R1: CurveParams = CurveParams {
        p: 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff_U576,
        a: 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffc_U576,
        b: 0xb3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef_U576,
        g: (
            0xaa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7_U576,
            0x3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f_U576,
        ),
        n: 0xffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973_U576,
        h: 1_U576,
        sec_bits: 192,
        weakness_check: true,
    };

    /// SEC 2 secp521r1, also NIST P-521 (p = 2^521 - 1)
    pub const SECP521R1: CurveParams = CurveParams {
        p: 0x1ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff_U576,
        a: 0x1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc_U576,
        b: 0x51953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00_U576,
        g: (
            0xc6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66_U576,
            0x11839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650_U576,
        ),
        n: 0x1fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409_U576,
        h: 1_U576,
        sec_bits: 256,
        weakness_check: true,
    };
}
