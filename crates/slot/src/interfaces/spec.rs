/// Describes which storage variable, or which entry of a mapping, to locate.
///
/// Keys are kept as the user typed them; they are classified when the slot is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSpec {
    /// Decimal or `0x`-prefixed hex index of the declared variable
    pub base_slot: String,
    /// The variable is a `mapping(K => V)`
    pub is_mapping: bool,
    /// The variable is a `mapping(K1 => mapping(K2 => V))`. Requires `is_mapping`.
    pub is_double_mapping: bool,
    /// The outer mapping key
    pub mapping_key: String,
    /// The inner mapping key
    pub second_mapping_key: String,
}

impl SlotSpec {
    /// A plain variable stored directly at `base_slot`
    pub fn direct(base_slot: impl Into<String>) -> Self {
        Self { base_slot: base_slot.into(), ..Default::default() }
    }

    /// The entry `key` of the mapping declared at `base_slot`
    pub fn mapping(base_slot: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            base_slot: base_slot.into(),
            is_mapping: true,
            mapping_key: key.into(),
            ..Default::default()
        }
    }

    /// The entry `[key][second_key]` of the nested mapping declared at `base_slot`
    pub fn double_mapping(
        base_slot: impl Into<String>,
        key: impl Into<String>,
        second_key: impl Into<String>,
    ) -> Self {
        Self {
            base_slot: base_slot.into(),
            is_mapping: true,
            is_double_mapping: true,
            mapping_key: key.into(),
            second_mapping_key: second_key.into(),
        }
    }
}
