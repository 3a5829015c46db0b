use std::collections::HashMap;

/// Reserved ID for the unknown token.
pub const UNK_ID: u32 = 0;
/// Reserved ID for the separator token.
pub const SEP_ID: u32 = 1;
/// Reserved ID for the padding token.
pub const PAD_ID: u32 = 2;
/// Reserved ID for the classification (sequence-start) token.
pub const CLS_ID: u32 = 3;
/// Reserved ID for the mask token.
pub const MASK_ID: u32 = 4;

/// Number of reserved special-token IDs. K-mer IDs start here.
pub const NUM_SPECIAL_TOKENS: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialTokens {
    pub unk: String,
    pub sep: String,
    pub pad: String,
    pub cls: String,
    pub mask: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        SpecialTokens {
            unk: "[UNK]".to_string(),
            sep: "[SEP]".to_string(),
            pad: "[PAD]".to_string(),
            cls: "[CLS]".to_string(),
            mask: "[MASK]".to_string(),
        }
    }
}

impl From<&SpecialTokens> for Vec<String> {
    fn from(val: &SpecialTokens) -> Self {
        vec![
            val.unk.clone(),
            val.sep.clone(),
            val.pad.clone(),
            val.cls.clone(),
            val.mask.clone(),
        ]
    }
}

impl From<SpecialTokens> for Vec<String> {
    fn from(val: SpecialTokens) -> Self {
        vec![val.unk, val.sep, val.pad, val.cls, val.mask]
    }
}

impl From<&SpecialTokens> for HashMap<String, u32> {
    fn from(val: &SpecialTokens) -> Self {
        let mut map = HashMap::new();
        map.insert(val.unk.clone(), UNK_ID);
        map.insert(val.sep.clone(), SEP_ID);
        map.insert(val.pad.clone(), PAD_ID);
        map.insert(val.cls.clone(), CLS_ID);
        map.insert(val.mask.clone(), MASK_ID);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_default_special_tokens() {
        let special_tokens = SpecialTokens::default();
        assert_eq!(special_tokens.unk, "[UNK]");
        assert_eq!(special_tokens.pad, "[PAD]");
    }

    #[rstest]
    fn test_reserved_ids_are_disjoint_and_dense() {
        let special_tokens = SpecialTokens::default();
        let map: HashMap<String, u32> = (&special_tokens).into();

        let mut ids: Vec<u32> = map.values().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[rstest]
    fn test_fixed_id_assignment() {
        let special_tokens = SpecialTokens::default();
        let map: HashMap<String, u32> = (&special_tokens).into();

        assert_eq!(map["[UNK]"], UNK_ID);
        assert_eq!(map["[SEP]"], SEP_ID);
        assert_eq!(map["[PAD]"], PAD_ID);
        assert_eq!(map["[CLS]"], CLS_ID);
        assert_eq!(map["[MASK]"], MASK_ID);
    }
}
