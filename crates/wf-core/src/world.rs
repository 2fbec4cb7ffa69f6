use std::collections::{BTreeMap, HashMap};
use std::ops::Index;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{WorldError, WorldResult};
use crate::item::{Item, normalize_name};
use crate::location::{Location, LocationId};
use crate::schema::{NO_TARGET, WorldData};

/// The validated world model. Owns all locations and item definitions.
///
/// Construction checks referential integrity, so every movement target and
/// every item position is guaranteed to name an existing location.
#[derive(Debug, Clone)]
pub struct World {
    locations: BTreeMap<LocationId, Location>,
    items: Vec<Item>,
    max_moves: u32,
    winning_items: Vec<String>,

    // Indexes
    by_name: HashMap<String, usize>,
}

impl World {
    /// Validate raw world data and build the model from it.
    pub fn from_data(data: WorldData) -> WorldResult<Self> {
        let max_moves = u32::try_from(data.max_moves)
            .ok()
            .filter(|m| *m > 0)
            .ok_or_else(|| {
                WorldError::integrity(format!(
                    "max_moves must be positive, got {}",
                    data.max_moves
                ))
            })?;

        let mut locations = BTreeMap::new();
        for raw in data.locations {
            let id = location_id(raw.id, "location id")?;
            let mut location = Location::new(id, raw.brief_description, raw.long_description);
            location.locked = raw.locked;
            for (keyword, target) in raw.available_commands {
                let target = location_id(target, "movement target")?;
                let keyword = normalize_name(&keyword);
                if location
                    .available_commands
                    .insert(keyword.clone(), target)
                    .is_some()
                {
                    return Err(WorldError::integrity(format!(
                        "duplicate command \"{keyword}\" at location {id}"
                    )));
                }
            }
            for name in raw.items {
                location.add_item(normalize_name(&name));
            }
            if locations.insert(id, location).is_some() {
                return Err(WorldError::integrity(format!("duplicate location id {id}")));
            }
        }

        for location in locations.values() {
            for (keyword, target) in &location.available_commands {
                if !locations.contains_key(target) {
                    return Err(WorldError::integrity(format!(
                        "command \"{keyword}\" at location {} leads to missing location {target}",
                        location.id
                    )));
                }
            }
        }

        let mut items = Vec::with_capacity(data.items.len());
        let mut by_name = HashMap::new();
        for raw in data.items {
            let name = normalize_name(&raw.name);
            let start = location_id(raw.start_position, "item start position")?;
            if !locations.contains_key(&start) {
                return Err(WorldError::integrity(format!(
                    "item \"{name}\" starts at missing location {start}"
                )));
            }
            let target = if raw.target_position == NO_TARGET {
                None
            } else {
                let target = location_id(raw.target_position, "item target position")?;
                if !locations.contains_key(&target) {
                    return Err(WorldError::integrity(format!(
                        "item \"{name}\" targets missing location {target}"
                    )));
                }
                Some(target)
            };
            let points = u32::try_from(raw.target_points).map_err(|_| {
                WorldError::integrity(format!(
                    "item \"{name}\" has negative target_points {}",
                    raw.target_points
                ))
            })?;

            if by_name.insert(name.clone(), items.len()).is_some() {
                return Err(WorldError::integrity(format!("duplicate item name \"{name}\"")));
            }
            let item = Item::new(&name, start).with_description(raw.description);
            items.push(match target {
                Some(target) => item.with_target(target, points),
                None => item,
            });
        }

        let mut placed: HashMap<&str, LocationId> = HashMap::new();
        for location in locations.values() {
            for name in &location.items {
                if let Some(other) = placed.insert(name.as_str(), location.id) {
                    return Err(WorldError::integrity(format!(
                        "item \"{name}\" is listed at both location {other} and location {}",
                        location.id
                    )));
                }
                if !by_name.contains_key(name) {
                    warn!(item = %name, location = %location.id, "location lists an undefined item");
                }
            }
        }

        let winning_items: Vec<String> = data
            .winning_items
            .iter()
            .map(|n| normalize_name(n))
            .collect();

        debug!(
            locations = locations.len(),
            items = items.len(),
            max_moves,
            "world loaded"
        );

        Ok(Self {
            locations,
            items,
            max_moves,
            winning_items,
            by_name,
        })
    }

    /// Decode and validate a JSON world.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        Self::from_data(WorldData::from_json(json)?)
    }

    /// Read, decode and validate a JSON world file.
    pub fn load(path: &Path) -> WorldResult<Self> {
        Self::from_data(WorldData::from_path(path)?)
    }

    // -----------------------------------------------------------------------
    // Locations
    // -----------------------------------------------------------------------

    /// Get a location by ID.
    pub fn location(&self, id: LocationId) -> WorldResult<&Location> {
        self.locations
            .get(&id)
            .ok_or(WorldError::LocationNotFound(id))
    }

    /// Get a mutable location by ID.
    pub fn location_mut(&mut self, id: LocationId) -> WorldResult<&mut Location> {
        self.locations
            .get_mut(&id)
            .ok_or(WorldError::LocationNotFound(id))
    }

    /// Check whether a location ID exists.
    pub fn contains_location(&self, id: LocationId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Iterate over all locations in ID order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// Find an item definition by name (case-normalized, exact).
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.by_name
            .get(&normalize_name(name))
            .map(|&idx| &self.items[idx])
    }

    /// All item definitions in file order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The location whose item set currently holds `name`, if any.
    pub fn item_location(&self, name: &str) -> Option<LocationId> {
        let name = normalize_name(name);
        self.locations
            .values()
            .find(|l| l.has_item(&name))
            .map(|l| l.id)
    }

    // -----------------------------------------------------------------------
    // Game parameters
    // -----------------------------------------------------------------------

    /// The move budget.
    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    /// Names of the items that must be deposited to win.
    pub fn winning_items(&self) -> &[String] {
        &self.winning_items
    }
}

impl Index<LocationId> for World {
    type Output = Location;

    /// # Panics
    ///
    /// Panics if `id` is not in the world. Use [`World::location`] for IDs
    /// that have not been validated.
    fn index(&self, id: LocationId) -> &Location {
        &self.locations[&id]
    }
}

fn location_id(raw: i64, what: &str) -> WorldResult<LocationId> {
    u32::try_from(raw)
        .map(LocationId)
        .map_err(|_| WorldError::integrity(format!("{what} {raw} is not a valid location id")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ItemData, LocationData};

    const CAMPUS: &str = include_str!("../../../worlds/campus.json");

    fn location(id: i64, exits: &[(&str, i64)], items: &[&str]) -> LocationData {
        LocationData {
            id,
            brief_description: format!("Room {id}"),
            long_description: format!("You are in room {id}."),
            available_commands: exits.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            items: items.iter().map(|s| s.to_string()).collect(),
            locked: false,
        }
    }

    fn item(name: &str, start: i64, target: i64, points: i64) -> ItemData {
        ItemData {
            name: name.to_string(),
            description: String::new(),
            start_position: start,
            target_position: target,
            target_points: points,
        }
    }

    fn two_rooms() -> WorldData {
        WorldData {
            locations: vec![
                location(0, &[("go east", 1)], &[]),
                location(1, &[("go west", 0)], &["Lamp"]),
            ],
            items: vec![item("lamp", 1, 0, 5)],
            max_moves: 10,
            winning_items: vec!["Lamp".to_string()],
        }
    }

    fn integrity_message(data: WorldData) -> String {
        match World::from_data(data) {
            Err(WorldError::DataIntegrity(msg)) => msg,
            other => panic!("expected a data integrity error, got {other:?}"),
        }
    }

    #[test]
    fn campus_world_loads() {
        let world = World::from_json(CAMPUS).unwrap();
        assert_eq!(world.location_count(), 9);
        assert_eq!(world.max_moves(), 40);
        assert_eq!(world.winning_items().len(), 3);
        assert!(world.location(LocationId(8)).unwrap().locked);
        assert_eq!(world.item_location("key"), Some(LocationId(5)));
        assert_eq!(world.item("KEY").unwrap().target_position, None);

        let mug = world.item("lucky mug").unwrap();
        assert_eq!(mug.target_position, Some(LocationId(0)));
        assert_eq!(mug.target_points, 40);
        assert_eq!(mug.start_position, LocationId(8));
        assert!(mug.description.starts_with("Your lucky mug."));
    }

    #[test]
    fn names_are_normalized() {
        let world = World::from_data(two_rooms()).unwrap();
        assert!(world.location(LocationId(1)).unwrap().has_item("lamp"));
        assert_eq!(world.winning_items(), ["lamp"]);
        assert!(world.item(" LAMP ").is_some());
        assert!(world.item("lam").is_none());
    }

    #[test]
    fn unknown_location_is_not_found() {
        let world = World::from_data(two_rooms()).unwrap();
        assert!(matches!(
            world.location(LocationId(7)),
            Err(WorldError::LocationNotFound(LocationId(7)))
        ));
    }

    #[test]
    fn dangling_movement_target() {
        let mut data = two_rooms();
        data.locations[0].available_commands.insert("go north".into(), 9);
        assert!(integrity_message(data).contains("missing location 9"));
    }

    #[test]
    fn dangling_item_positions() {
        let mut data = two_rooms();
        data.items[0].start_position = 4;
        assert!(integrity_message(data).contains("starts at missing location 4"));

        let mut data = two_rooms();
        data.items[0].target_position = 4;
        assert!(integrity_message(data).contains("targets missing location 4"));
    }

    #[test]
    fn no_target_sentinel_is_accepted() {
        let mut data = two_rooms();
        data.items[0].target_position = NO_TARGET;
        let world = World::from_data(data).unwrap();
        assert_eq!(world.item("lamp").unwrap().target_position, None);
    }

    #[test]
    fn other_negative_ids_are_rejected() {
        let mut data = two_rooms();
        data.items[0].target_position = -2;
        assert!(integrity_message(data).contains("not a valid location id"));
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut data = two_rooms();
        data.locations.push(location(1, &[], &[]));
        assert!(integrity_message(data).contains("duplicate location id 1"));

        let mut data = two_rooms();
        data.items.push(item("LAMP", 0, -1, 0));
        assert!(integrity_message(data).contains("duplicate item name"));

        let mut data = two_rooms();
        data.locations[0].items.push("lamp".into());
        assert!(integrity_message(data).contains("listed at both"));

        let mut data = two_rooms();
        data.locations[1].available_commands.insert("Go  West".into(), 1);
        let message = integrity_message(data);
        assert!(message.contains("duplicate command \"go west\" at location 1"));
    }

    #[test]
    fn bad_budget_and_points() {
        let mut data = two_rooms();
        data.max_moves = 0;
        assert!(integrity_message(data).contains("max_moves"));

        let mut data = two_rooms();
        data.items[0].target_points = -5;
        assert!(integrity_message(data).contains("negative target_points"));
    }

    #[test]
    fn index_by_validated_id() {
        let world = World::from_data(two_rooms()).unwrap();
        assert_eq!(world[LocationId(1)].brief_description, "Room 1");
    }

    #[test]
    #[should_panic]
    fn index_by_unknown_id_panics() {
        let world = World::from_data(two_rooms()).unwrap();
        let _ = &world[LocationId(42)];
    }

    #[test]
    fn item_location_tracks_moves() {
        let mut world = World::from_data(two_rooms()).unwrap();
        assert_eq!(world.item_location("lamp"), Some(LocationId(1)));
        world.location_mut(LocationId(1)).unwrap().remove_item("lamp");
        assert_eq!(world.item_location("lamp"), None);
    }

    proptest::proptest! {
        #[test]
        fn chained_worlds_always_validate(n in 1usize..20, extra in proptest::collection::vec((0usize..20, 0usize..20), 0..10)) {
            let mut locations: Vec<LocationData> = (0..n)
                .map(|i| {
                    let mut exits = Vec::new();
                    if i + 1 < n {
                        exits.push(("forward", (i + 1) as i64));
                    }
                    if i > 0 {
                        exits.push(("back", (i - 1) as i64));
                    }
                    location(i as i64, &exits, &[])
                })
                .collect();
            for (k, (from, to)) in extra.into_iter().enumerate() {
                locations[from % n]
                    .available_commands
                    .insert(format!("jump {k}"), (to % n) as i64);
            }
            let data = WorldData { locations, items: vec![], max_moves: 40, winning_items: vec![] };

            let world = World::from_data(data).unwrap();
            for loc in world.locations() {
                for target in loc.available_commands.values() {
                    proptest::prop_assert!(world.contains_location(*target));
                }
            }
        }
    }
}
