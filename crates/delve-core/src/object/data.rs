//! Validated static data shared by every generator

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strum::EnumCount;

use super::artifact::{Artifact, ArtifactId};
use super::ego::{Ego, EgoId, FaultGrant};
use super::fault::{Fault, FaultId};
use super::kind::{ItemKind, KindId};
use super::tval::Tval;
use crate::world::DataError;

/// On-disk shape of a data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataFile {
    pub kinds: Vec<ItemKind>,
    #[serde(default)]
    pub egos: Vec<Ego>,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub faults: Vec<Fault>,
    /// Coin kinds from cheapest to most valuable
    pub coins: Vec<KindId>,
}

/// Kinds, egos, artifacts, faults and coins after cross-reference checks
#[derive(Debug, Clone)]
pub struct GameData {
    kinds: Vec<ItemKind>,
    egos: Vec<Ego>,
    artifacts: Vec<Artifact>,
    faults: Vec<Fault>,
    coins: Vec<KindId>,
    /// Normalised so that `a < b`
    forbidden: HashSet<(EgoId, EgoId)>,
    by_tval: Vec<Vec<KindId>>,
}

impl GameData {
    pub fn new(file: DataFile) -> Result<Self, DataError> {
        let DataFile {
            kinds,
            egos,
            artifacts,
            faults,
            coins,
        } = file;

        for kind in &kinds {
            if kind.alloc.prob > 0 && kind.alloc.min > kind.alloc.max {
                return Err(DataError::InvalidAllocation {
                    kind: kind.name.clone(),
                    min: kind.alloc.min,
                    max: kind.alloc.max,
                });
            }
        }

        let check_faults = |owner: &str, grants: &[FaultGrant]| -> Result<(), DataError> {
            match grants.iter().find(|g| g.fault.0 >= faults.len()) {
                Some(g) => Err(DataError::UnknownFault {
                    owner: owner.to_string(),
                    index: g.fault.0,
                }),
                None => Ok(()),
            }
        };

        let mut forbidden = HashSet::new();
        for (i, ego) in egos.iter().enumerate() {
            if let Some(p) = ego.possible.iter().find(|p| p.kind.0 >= kinds.len()) {
                return Err(DataError::UnknownKind {
                    ego: ego.name.clone(),
                    index: p.kind.0,
                });
            }
            for other in &ego.forbid {
                if other.0 >= egos.len() {
                    return Err(DataError::UnknownEgo {
                        ego: ego.name.clone(),
                        index: other.0,
                    });
                }
                if other.0 != i {
                    forbidden.insert(ordered_pair(EgoId(i), *other));
                }
            }
            check_faults(&ego.name, &ego.faults)?;
        }

        for art in &artifacts {
            if let Some(kind) = art.kind {
                let Some(base) = kinds.get(kind.0) else {
                    return Err(DataError::UnknownArtifactKind {
                        artifact: art.name.clone(),
                        index: kind.0,
                    });
                };
                if base.tval != art.tval {
                    return Err(DataError::ArtifactTvalMismatch {
                        artifact: art.name.clone(),
                        expected: art.tval.to_string(),
                        found: base.tval.to_string(),
                    });
                }
            }
            check_faults(&art.name, &art.faults)?;
        }

        if coins.is_empty() {
            return Err(DataError::NoCoins);
        }
        for (index, coin) in coins.iter().enumerate() {
            if kinds.get(coin.0).is_none_or(|k| k.tval != Tval::Gold) {
                return Err(DataError::InvalidCoin { index });
            }
        }

        let mut by_tval = vec![Vec::new(); Tval::COUNT];
        for (i, kind) in kinds.iter().enumerate() {
            by_tval[kind.tval.index()].push(KindId(i));
        }

        Ok(Self {
            kinds,
            egos,
            artifacts,
            faults,
            coins,
            forbidden,
            by_tval,
        })
    }

    /// Parse and validate a JSON data file
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let file: DataFile = serde_json::from_str(json)?;
        Self::new(file)
    }

    pub fn kinds(&self) -> &[ItemKind] {
        &self.kinds
    }

    pub fn kind(&self, id: KindId) -> &ItemKind {
        &self.kinds[id.0]
    }

    pub fn egos(&self) -> &[Ego] {
        &self.egos
    }

    pub fn ego(&self, id: EgoId) -> &Ego {
        &self.egos[id.0]
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn artifact(&self, id: ArtifactId) -> &Artifact {
        &self.artifacts[id.0]
    }

    pub fn faults(&self) -> &[Fault] {
        &self.faults
    }

    pub fn fault(&self, id: FaultId) -> &Fault {
        &self.faults[id.0]
    }

    /// Coin kinds, cheapest first
    pub fn coins(&self) -> &[KindId] {
        &self.coins
    }

    /// All kinds of one category, in index order
    pub fn kinds_of(&self, tval: Tval) -> &[KindId] {
        &self.by_tval[tval.index()]
    }

    /// Find a kind by category and sub-type
    pub fn lookup_kind(&self, tval: Tval, sval: u16) -> Option<KindId> {
        self.kinds_of(tval)
            .iter()
            .copied()
            .find(|id| self.kinds[id.0].sval == sval)
    }

    /// Whether the two egos may never share an item
    pub fn is_forbidden(&self, a: EgoId, b: EgoId) -> bool {
        self.forbidden.contains(&ordered_pair(a, b))
    }

    /// Number of forbidden ego pairs
    pub fn forbidden_pairs(&self) -> usize {
        self.forbidden.len()
    }

    /// Export back to the on-disk shape
    pub fn to_file(&self) -> DataFile {
        DataFile {
            kinds: self.kinds.clone(),
            egos: self.egos.clone(),
            artifacts: self.artifacts.clone(),
            faults: self.faults.clone(),
            coins: self.coins.clone(),
        }
    }
}

fn ordered_pair(a: EgoId, b: EgoId) -> (EgoId, EgoId) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Allocation;

    fn coin_file() -> DataFile {
        DataFile {
            kinds: vec![ItemKind::new("copper", Tval::Gold, 1)],
            coins: vec![KindId(0)],
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_data() {
        let data = GameData::new(coin_file()).unwrap();
        assert_eq!(data.kinds().len(), 1);
        assert_eq!(data.kinds_of(Tval::Gold), &[KindId(0)]);
        assert_eq!(data.lookup_kind(Tval::Gold, 1), Some(KindId(0)));
        assert_eq!(data.lookup_kind(Tval::Gold, 2), None);
    }

    #[test]
    fn test_forbidden_pairs_are_symmetric() {
        let mut file = coin_file();
        file.egos.push(Ego::new("a", 0).forbidding(EgoId(1)));
        file.egos.push(Ego::new("b", 0).forbidding(EgoId(0)));
        file.egos.push(Ego::new("c", 0).forbidding(EgoId(2)));
        let data = GameData::new(file).unwrap();
        assert!(data.is_forbidden(EgoId(0), EgoId(1)));
        assert!(data.is_forbidden(EgoId(1), EgoId(0)));
        assert!(!data.is_forbidden(EgoId(0), EgoId(2)));
        assert_eq!(data.forbidden_pairs(), 1);
    }

    #[test]
    fn test_rejects_dangling_references() {
        let mut file = coin_file();
        file.egos.push(Ego::new("of Nothing", 0).with_kinds([KindId(7)]));
        assert!(matches!(
            GameData::new(file),
            Err(DataError::UnknownKind { index: 7, .. })
        ));

        let mut file = coin_file();
        file.egos.push(Ego::new("x", 0).forbidding(EgoId(4)));
        assert!(matches!(
            GameData::new(file),
            Err(DataError::UnknownEgo { index: 4, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_allocation_and_coins() {
        let mut file = coin_file();
        let mut kind = ItemKind::new("Broken", Tval::Sword, 1);
        kind.alloc = Allocation::new(10, 30, 5);
        file.kinds.push(kind);
        assert!(matches!(
            GameData::new(file),
            Err(DataError::InvalidAllocation { .. })
        ));

        let mut file = coin_file();
        file.coins.clear();
        assert_eq!(GameData::new(file).unwrap_err(), DataError::NoCoins);

        let mut file = coin_file();
        file.kinds.push(ItemKind::new("Dagger", Tval::Sword, 1));
        file.coins.push(KindId(1));
        assert_eq!(
            GameData::new(file).unwrap_err(),
            DataError::InvalidCoin { index: 1 }
        );
    }

    #[test]
    fn test_artifact_kind_checks() {
        let mut file = coin_file();
        file.artifacts
            .push(Artifact::new("of Gold", KindId(0), Tval::Sword));
        assert!(matches!(
            GameData::new(file),
            Err(DataError::ArtifactTvalMismatch { .. })
        ));

        let mut file = coin_file();
        let mut art = Artifact::new("Lost", KindId(0), Tval::Gold);
        art.kind = None;
        file.artifacts.push(art);
        assert!(GameData::new(file).is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let data = GameData::new(coin_file()).unwrap();
        let json = serde_json::to_string(&data.to_file()).unwrap();
        let back = GameData::from_json(&json).unwrap();
        assert_eq!(back.kinds()[0].name, "copper");
        assert!(GameData::from_json("{").is_err());
    }
}
