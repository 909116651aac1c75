use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

// The three fixed menu categories
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Course {
    #[default]
    Starters,
    Mains,
    Dessert,
}

impl Course {
    // Every course, in the order the screens list them
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];
}

// How the course is displayed in selectors and lists
impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Course::Starters => write!(f, "Starters"),
            Course::Mains => write!(f, "Mains"),
            Course::Dessert => write!(f, "Dessert"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    #[error("price is empty")]
    Empty,
    #[error("price cannot be negative or signed")]
    Signed,
    #[error("price is not a number")]
    Malformed,
    #[error("price has more than two decimal places")]
    TooPrecise,
    #[error("price is too large")]
    Overflow,
}

// A non-negative amount of money, held in whole cents
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    // Build a price from an already-validated cent amount
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    // Raw amount in cents, used for exact arithmetic
    pub fn cents(self) -> u64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    // Accepts `12`, `12.5`, `12.50` and `.5`. Anything finer than a cent is
    // rejected rather than rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceParseError::Empty);
        }
        if s.starts_with('-') || s.starts_with('+') {
            return Err(PriceParseError::Signed);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(PriceParseError::Malformed);
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(PriceParseError::Malformed);
        }
        if fraction.len() > 2 {
            return Err(PriceParseError::TooPrecise);
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| PriceParseError::Overflow)?
        };
        // "5" after the point means 50 cents
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| PriceParseError::Malformed)? * 10,
            _ => fraction.parse::<u64>().map_err(|_| PriceParseError::Malformed)?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Price)
            .ok_or(PriceParseError::Overflow)
    }
}

// Always two decimals, e.g. `25.00`
impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// Opaque identifier assigned when an item is added to a store
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MenuItemId(Uuid);

impl MenuItemId {
    // Fresh random (v4) id
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// A single dish on the menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: Price,
    pub added_at: DateTime<Local>,
}

// Which input was left blank
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Field {
    DishName,
    Description,
    Price,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Field::DishName => write!(f, "dish name"),
            Field::Description => write!(f, "description"),
            Field::Price => write!(f, "price"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Please fill all fields: the {0} is missing.")]
    MissingField(Field),
    #[error("Please enter a valid price (\"{input}\": {source}).")]
    InvalidPrice {
        input: String,
        #[source]
        source: PriceParseError,
    },
}

// Raw, unvalidated input for a new menu item
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuItemDraft {
    pub dish_name: String,
    pub description: String,
    pub course: Option<Course>, // None falls back to the store's default course
    pub price: String,
}

// Mean price of the items in `course`, rounded half-up to the cent.
// Returns Price::ZERO when no item belongs to the course.
pub fn average_price<'a, I>(items: I, course: Course) -> Price
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let (total, count) = items
        .into_iter()
        .filter(|item| item.course == course)
        .fold((0u128, 0u128), |(total, count), item| {
            (total + item.price.cents() as u128, count + 1)
        });

    if count == 0 {
        return Price::ZERO;
    }
    // The mean never exceeds the largest price, so it fits back into u64
    Price(((2 * total + count) / (2 * count)) as u64)
}

// Count and average for one course, as shown on the home screen
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub course: Course,
    pub count: usize,
    pub average: Price,
}

// Insertion-ordered collection of every dish the app knows about
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    default_course: Course,
}

impl MenuStore {
    // Empty store; `default_course` is used when a draft names no course
    pub fn new(default_course: Course) -> Self {
        Self {
            items: vec![],
            default_course,
        }
    }

    // Change the course used for drafts without one
    pub fn set_default_course(&mut self, course: Course) {
        self.default_course = course;
    }

    // Validates `draft` and appends it with a fresh id.
    // Nothing is stored when validation fails.
    pub fn add(&mut self, draft: MenuItemDraft) -> Result<&MenuItem, MenuError> {
        let dish_name = required(&draft.dish_name, Field::DishName)?;
        let description = required(&draft.description, Field::Description)?;
        let price_text = required(&draft.price, Field::Price)?;
        let price = price_text
            .parse::<Price>()
            .map_err(|source| MenuError::InvalidPrice {
                input: price_text.to_string(),
                source,
            })?;

        let mut id = MenuItemId::generate();
        while self.get(&id).is_some() {
            id = MenuItemId::generate();
        }

        let item = MenuItem {
            id,
            dish_name: dish_name.to_string(),
            description: description.to_string(),
            course: draft.course.unwrap_or(self.default_course),
            price,
            added_at: Local::now(),
        };
        debug!(
            "Added menu item {} '{}' ({}, {})",
            item.id, item.dish_name, item.course, item.price
        );
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    // Removes the item with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &MenuItemId) -> Option<MenuItem> {
        let index = self.items.iter().position(|item| item.id == *id)?;
        let removed = self.items.remove(index);
        debug!("Removed menu item {} '{}'", removed.id, removed.dish_name);
        Some(removed)
    }

    // Items of one course, in insertion order
    pub fn filter_by_course(&self, course: Course) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.course == course).collect()
    }

    // See the free `average_price` function
    pub fn average_price(&self, course: Course) -> Price {
        average_price(&self.items, course)
    }

    // Count and average for each course, in Course::ALL order
    pub fn summary(&self) -> [CourseSummary; 3] {
        Course::ALL.map(|course| CourseSummary {
            course,
            count: self.items.iter().filter(|item| item.course == course).count(),
            average: self.average_price(course),
        })
    }

    // Look up an item by id
    pub fn get(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    // All items, in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    // Number of dishes on the menu
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// Trimmed `value`, or MissingField when it is blank
fn required(value: &str, field: Field) -> Result<&str, MenuError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MenuError::MissingField(field));
    }
    Ok(trimmed)
}
