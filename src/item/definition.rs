use serde::Deserialize;
use super::properties::OnUseEffect;

/// An immutable item that a player can pick up or use
///
/// Items are plain values: the player never creates or mutates them, it only
/// stores copies in its inventory. Two items are "the same" for uniqueness
/// checks when their `id` matches, regardless of the other fields.
///
/// No validation happens on construction. Negative weights or heal amounts
/// are accepted as-is; the player's sums saturate rather than overflow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ItemData")]
pub struct Item {
    /// Identity used for uniqueness checks
    id: i32,

    /// Display name
    name: String,

    /// How much health the item restores when picked up
    heal: i32,

    /// How much armour the item gives while carried
    armour: i32,

    /// How much the item weighs in kilograms
    weight: i32,

    /// A unique item can only be carried once
    unique: bool,

    /// Rare items get a shiny pickup effect
    rare: bool,

    /// What happens when the item is used
    on_use: Option<OnUseEffect>,
}

impl Item {
    /// Creates a new item
    ///
    /// The on-use behaviour is inferred from the name, so an item called
    /// "Stink Bomb" is always a stink bomb.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        heal: i32,
        armour: i32,
        weight: i32,
        unique: bool,
        rare: bool,
    ) -> Self {
        let name = name.into();
        let on_use = OnUseEffect::from_item_name(&name);
        Item {
            id,
            name,
            heal,
            armour,
            weight,
            unique,
            rare,
            on_use,
        }
    }

    /// Starts a builder with every field at its default
    pub fn builder() -> ItemBuilder {
        ItemBuilder::default()
    }

    /// Identity used for uniqueness checks
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Health restored on pickup; zero or less means the item is stored
    pub fn heal(&self) -> i32 {
        self.heal
    }

    /// Armour granted while carried
    pub fn armour(&self) -> i32 {
        self.armour
    }

    /// Weight in kilograms
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Returns true if only one item with this id may be carried
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Returns true if the item is rare
    pub fn is_rare(&self) -> bool {
        self.rare
    }

    /// Behaviour that runs when the item is used, if any
    pub fn on_use(&self) -> Option<OnUseEffect> {
        self.on_use
    }

    /// Returns true if the item is consumed on pickup instead of stored
    pub fn heals(&self) -> bool {
        self.heal > 0
    }
}

/// Fluent builder for items
///
/// # Example
///
/// ```
/// use rpg_player::item::Item;
///
/// let potion = Item::builder().with_id(7).with_heal(100).build();
/// assert_eq!(potion.heal(), 100);
/// assert!(!potion.is_rare());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemBuilder {
    id: i32,
    name: String,
    heal: i32,
    armour: i32,
    weight: i32,
    unique: bool,
    rare: bool,
    on_use: Option<OnUseEffect>,
}

impl ItemBuilder {
    /// Sets the item id
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the heal amount
    pub fn with_heal(mut self, heal: i32) -> Self {
        self.heal = heal;
        self
    }

    /// Sets the armour bonus
    pub fn with_armour(mut self, armour: i32) -> Self {
        self.armour = armour;
        self
    }

    /// Sets the weight in kilograms
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Marks the item as unique or not
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Marks the item as rare or not
    pub fn rare(mut self, rare: bool) -> Self {
        self.rare = rare;
        self
    }

    /// Tags the item with an explicit on-use behaviour
    ///
    /// Without this the tag is inferred from the name.
    pub fn with_on_use(mut self, on_use: OnUseEffect) -> Self {
        self.on_use = Some(on_use);
        self
    }

    /// Finishes the item, inferring the on-use tag from the name if none was set
    pub fn build(self) -> Item {
        ItemData {
            id: self.id,
            name: self.name,
            heal: self.heal,
            armour: self.armour,
            weight: self.weight,
            unique: self.unique,
            rare: self.rare,
            on_use: self.on_use,
        }
        .into()
    }
}

/// Raw item fields as they appear in catalogs
#[derive(Debug, Deserialize)]
struct ItemData {
    id: i32,
    name: String,
    #[serde(default)]
    heal: i32,
    #[serde(default)]
    armour: i32,
    #[serde(default)]
    weight: i32,
    #[serde(default)]
    unique: bool,
    #[serde(default)]
    rare: bool,
    #[serde(default)]
    on_use: Option<OnUseEffect>,
}

impl From<ItemData> for Item {
    fn from(data: ItemData) -> Self {
        // An explicit tag wins over the name
        let on_use = data.on_use.or_else(|| OnUseEffect::from_item_name(&data.name));
        Item {
            id: data.id,
            name: data.name,
            heal: data.heal,
            armour: data.armour,
            weight: data.weight,
            unique: data.unique,
            rare: data.rare,
            on_use,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let item = Item::builder().build();
        assert_eq!(item.id(), 0);
        assert_eq!(item.name(), "");
        assert_eq!(item.heal(), 0);
        assert_eq!(item.armour(), 0);
        assert_eq!(item.weight(), 0);
        assert!(!item.is_unique());
        assert!(!item.is_rare());
        assert_eq!(item.on_use(), None);
    }

    #[test]
    fn test_new_and_builder_agree() {
        let built = Item::builder()
            .with_id(3)
            .with_name("Shield")
            .with_armour(20)
            .with_weight(15)
            .unique(true)
            .build();
        let constructed = Item::new(3, "Shield", 0, 20, 15, true, false);
        assert_eq!(built, constructed);
    }

    #[test]
    fn test_stink_bomb_is_tagged_by_name() {
        let bomb = Item::new(9, "Stink Bomb", 0, 0, 1, false, false);
        assert_eq!(bomb.on_use(), Some(OnUseEffect::StinkBomb));

        let built = Item::builder().with_name("Stink Bomb").build();
        assert_eq!(built.on_use(), Some(OnUseEffect::StinkBomb));
    }

    #[test]
    fn test_explicit_tag_without_name() {
        let bomb = Item::builder()
            .with_name("Rotten Egg")
            .with_on_use(OnUseEffect::StinkBomb)
            .build();
        assert_eq!(bomb.on_use(), Some(OnUseEffect::StinkBomb));
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let odd = Item::new(-1, "Anti-weight", -5, -10, -20, false, false);
        assert_eq!(odd.weight(), -20);
        assert_eq!(odd.armour(), -10);
        assert!(!odd.heals());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let item: Item = serde_json::from_str(r#"{ "id": 4, "name": "Pebble" }"#).unwrap();
        assert_eq!(item.id(), 4);
        assert_eq!(item.weight(), 0);
        assert_eq!(item.on_use(), None);

        let bomb: Item = serde_json::from_str(r#"{ "id": 5, "name": "Stink Bomb" }"#).unwrap();
        assert_eq!(bomb.on_use(), Some(OnUseEffect::StinkBomb));
    }
}
