// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Closed categorical domains for activity submissions.
//!
//! Each domain is a fixed enum whose wire name matches the label shown in
//! the submission form (e.g. `"Electric Car"`). Parsing an unknown label
//! fails with [`UnknownCategory`], so no free-form string ever reaches the
//! footprint calculator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A label that is not part of its categorical domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a valid value for {field}")]
pub struct UnknownCategory {
    pub field: &'static str,
    pub value: String,
}

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[cfg_attr(feature = "binding-generation", derive(TS))]
        #[cfg_attr(
            feature = "binding-generation",
            ts(export, export_to = "web/src/lib/generated/")
        )]
        pub enum $name {
            #[default]
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// JSON field name this category is submitted under.
            pub const FIELD: &'static str = $field;

            /// Every value of the domain, in form order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.as_str() == s)
                    .ok_or_else(|| UnknownCategory {
                        field: Self::FIELD,
                        value: s.to_string(),
                    })
            }
        }
    };
}

category! {
    /// Mode of transport used for the day's travel.
    TransportType, field = "transportType" {
        None => "None",
        Car => "Car",
        Bus => "Bus",
        Train => "Train",
        Bike => "Bike",
        Motorcycle => "Motorcycle",
        ElectricCar => "Electric Car",
    }
}

category! {
    /// Cooking energy source.
    CookingType, field = "cookingType" {
        None => "None",
        Gas => "Gas",
        Electric => "Electric",
        Induction => "Induction",
    }
}

category! {
    /// Main protein / diet of the day.
    ///
    /// "Beef" is deliberately absent: it has no emission factor and is
    /// rejected during request validation.
    FoodType, field = "foodType" {
        None => "None",
        Chicken => "Chicken",
        Vegetarian => "Vegetarian",
        Vegan => "Vegan",
        Fish => "Fish",
        Pork => "Pork",
    }
}

category! {
    /// Shopping category (weekly average).
    Shopping, field = "shopping" {
        None => "None",
        Clothes => "Clothes",
        Electronics => "Electronics",
        Furniture => "Furniture",
        Plastic => "Plastic",
        Groceries => "Groceries",
    }
}
