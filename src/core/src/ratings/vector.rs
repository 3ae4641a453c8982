use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// The closed set of player rating attributes. OVR is a member of the set but
/// is always derived from the others, never accepted as a free input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingKey {
    Ovr,
    // movement
    Spd,
    Acc,
    Agi,
    Cod,
    Str,
    Awr,
    // ball carrier
    Car,
    Bcv,
    Btk,
    Trk,
    Sfa,
    Spm,
    Jkm,
    // receiving
    Cth,
    Cit,
    Spc,
    Srr,
    Mrr,
    Drr,
    Rls,
    Jmp,
    // passing
    Thp,
    Sac,
    Mac,
    Dac,
    Run,
    Tup,
    Bsk,
    Pac,
    // blocking
    Pbk,
    Pbp,
    Pbf,
    Rbk,
    Rbp,
    Rbf,
    Lbk,
    Ilb,
    // defense
    Prc,
    Tak,
    Pow,
    Bsh,
    Fmv,
    Pmv,
    Pur,
    Mcv,
    Zcv,
    Prs,
    // special teams / durability
    Ret,
    Kpw,
    Kac,
    Sta,
    Tgh,
    Inj,
    Lsp,
}

pub const KEY_COUNT: usize = 55;

const TOKENS: [&str; KEY_COUNT] = [
    "OVR", "SPD", "ACC", "AGI", "COD", "STR", "AWR", "CAR", "BCV", "BTK", "TRK", "SFA", "SPM",
    "JKM", "CTH", "CIT", "SPC", "SRR", "MRR", "DRR", "RLS", "JMP", "THP", "SAC", "MAC", "DAC",
    "RUN", "TUP", "BSK", "PAC", "PBK", "PBP", "PBF", "RBK", "RBP", "RBF", "LBK", "ILB", "PRC",
    "TAK", "POW", "BSH", "FMV", "PMV", "PUR", "MCV", "ZCV", "PRS", "RET", "KPW", "KAC", "STA",
    "TGH", "INJ", "LSP",
];

impl RatingKey {
    pub const ALL: [RatingKey; KEY_COUNT] = [
        RatingKey::Ovr,
        RatingKey::Spd,
        RatingKey::Acc,
        RatingKey::Agi,
        RatingKey::Cod,
        RatingKey::Str,
        RatingKey::Awr,
        RatingKey::Car,
        RatingKey::Bcv,
        RatingKey::Btk,
        RatingKey::Trk,
        RatingKey::Sfa,
        RatingKey::Spm,
        RatingKey::Jkm,
        RatingKey::Cth,
        RatingKey::Cit,
        RatingKey::Spc,
        RatingKey::Srr,
        RatingKey::Mrr,
        RatingKey::Drr,
        RatingKey::Rls,
        RatingKey::Jmp,
        RatingKey::Thp,
        RatingKey::Sac,
        RatingKey::Mac,
        RatingKey::Dac,
        RatingKey::Run,
        RatingKey::Tup,
        RatingKey::Bsk,
        RatingKey::Pac,
        RatingKey::Pbk,
        RatingKey::Pbp,
        RatingKey::Pbf,
        RatingKey::Rbk,
        RatingKey::Rbp,
        RatingKey::Rbf,
        RatingKey::Lbk,
        RatingKey::Ilb,
        RatingKey::Prc,
        RatingKey::Tak,
        RatingKey::Pow,
        RatingKey::Bsh,
        RatingKey::Fmv,
        RatingKey::Pmv,
        RatingKey::Pur,
        RatingKey::Mcv,
        RatingKey::Zcv,
        RatingKey::Prs,
        RatingKey::Ret,
        RatingKey::Kpw,
        RatingKey::Kac,
        RatingKey::Sta,
        RatingKey::Tgh,
        RatingKey::Inj,
        RatingKey::Lsp,
    ];

    pub fn token(self) -> &'static str {
        TOKENS[self as usize]
    }
}

impl fmt::Display for RatingKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for RatingKey {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let token = s.trim().to_uppercase();
        TOKENS
            .iter()
            .position(|t| *t == token)
            .map(|i| RatingKey::ALL[i])
            .ok_or(())
    }
}

impl Serialize for RatingKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for RatingKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = RatingKey;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a rating key token such as SPD or AWR")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<RatingKey, E> {
                value
                    .parse()
                    .map_err(|_| E::custom(format!("unknown rating key '{}'", value)))
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

/// Round to the nearest integer and clamp to the valid rating range.
pub fn clamp_rating(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 99.0) as u8
}

/// Soft dev-cap compression: values above the cap keep half of the overshoot
/// instead of being truncated. Applies to every key except OVR.
pub fn compress_over_cap(ratings: &mut RatingVector, cap: u8) {
    for key in RatingKey::ALL {
        if key == RatingKey::Ovr {
            continue;
        }
        let value = ratings.get(key) as f64;
        let cap = cap as f64;
        if value > cap {
            ratings.set(key, clamp_rating(cap + 0.5 * (value - cap)));
        }
    }
}

/// Dense vector over the full rating key set, all values in [0,99].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingVector([u8; KEY_COUNT]);

impl RatingVector {
    /// Every defined key present, every value zero.
    pub fn empty() -> Self {
        RatingVector([0; KEY_COUNT])
    }

    pub fn get(&self, key: RatingKey) -> u8 {
        self.0[key as usize]
    }

    pub fn set(&mut self, key: RatingKey, value: u8) {
        self.0[key as usize] = value.min(99);
    }
}

impl Default for RatingVector {
    fn default() -> Self {
        RatingVector::empty()
    }
}

impl Index<RatingKey> for RatingVector {
    type Output = u8;

    fn index(&self, key: RatingKey) -> &u8 {
        &self.0[key as usize]
    }
}

impl Serialize for RatingVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(KEY_COUNT))?;
        for key in RatingKey::ALL {
            map.serialize_entry(key.token(), &self.get(key))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RatingVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct VectorVisitor;

        impl<'de> Visitor<'de> for VectorVisitor {
            type Value = RatingVector;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of rating key tokens to numbers")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<RatingVector, A::Error> {
                let mut vector = RatingVector::empty();
                while let Some((token, value)) = access.next_entry::<String, f64>()? {
                    // The vector is a closed set: unknown keys are dropped,
                    // never stored.
                    if let Ok(key) = token.parse::<RatingKey>() {
                        vector.set(key, clamp_rating(value));
                    }
                }
                Ok(vector)
            }
        }

        deserializer.deserialize_map(VectorVisitor)
    }
}
