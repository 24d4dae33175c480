/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Declarative macros used by the service crates to declare their shapes.
//!
//! Structures are declared once and expand into the record (public `Option` fields, serde
//! support with PascalCase member names, structural equality) and its consuming builder.
//! Setter names are spelled out next to each field, e.g. `policy_id (set_policy_id): String`.

/// Declare a closed string-value set.
///
/// ```ignore
/// wire_enum! {
///     pub enum RecordState {
///         Active => "ACTIVE",
///         Archived => "ARCHIVED",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Clone, Debug)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value returned by the service that is not one of the declared values.
            ///
            /// Values compare, hash and order by their wire value, so `Unknown` holding a
            /// declared value is equal to that declared constant.
            Unknown(String),
        }

        impl $name {
            /// Strictly decodes a wire value, rejecting anything that is not declared.
            pub fn from_value(raw: &str) -> Result<Self, $crate::UnknownVariantError> {
                match raw {
                    $($value => Ok($name::$variant),)+
                    other => Err($crate::UnknownVariantError::new(
                        stringify!($name),
                        other,
                        Self::values(),
                    )),
                }
            }

            /// Returns the wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Every declared wire value, in declaration order.
            pub fn values() -> &'static [&'static str] {
                &[$($value),+]
            }

            /// `false` for values captured in `Unknown`.
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }

            // Declared values sort in declaration order, ahead of undeclared ones.
            fn rank(&self) -> usize {
                let values = Self::values();
                values
                    .iter()
                    .position(|value| *value == self.as_str())
                    .unwrap_or(values.len())
            }

            fn from_wire(raw: String) -> Self {
                match Self::from_value(&raw) {
                    Ok(known) => known,
                    Err(_) => $name::Unknown(raw),
                }
            }
        }

        impl $crate::WireEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn values() -> &'static [&'static str] {
                $name::values()
            }

            fn from_value(raw: &str) -> Result<Self, $crate::UnknownVariantError> {
                $name::from_value(raw)
            }

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self.as_str(), state)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.rank()
                    .cmp(&other.rank())
                    .then_with(|| self.as_str().cmp(other.as_str()))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::from_value(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from_wire(raw))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __model_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident ($setter:ident): $ty:ty
            ),*
        }
    ) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(
            Clone,
            Debug,
            Default,
            PartialEq,
            $crate::__private::serde::Serialize,
            $crate::__private::serde::Deserialize,
        )]
        #[serde(crate = "sdk_types::__private::serde", rename_all = "PascalCase")]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            #[doc = concat!("Creates a new builder-style object to manufacture [`", stringify!($name), "`].")]
            pub fn builder() -> $builder {
                <$builder as Default>::default()
            }
        }

        #[doc = concat!("A builder for [`", stringify!($name), "`].")]
        #[non_exhaustive]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $builder {
            $(pub(crate) $field: Option<$ty>,)*
        }

        impl $builder {
            $(
                #[doc = concat!("Sets `", stringify!($field), "`.")]
                pub fn $field(mut self, input: impl Into<$ty>) -> Self {
                    self.$field = Some(input.into());
                    self
                }

                #[doc = concat!("Sets or clears `", stringify!($field), "`.")]
                pub fn $setter(&mut self, input: Option<$ty>) -> &mut Self {
                    self.$field = input;
                    self
                }
            )*
        }
    };
}

/// Declare a nested value object or an output, with an infallible builder.
#[macro_export]
macro_rules! model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident ($setter:ident): $ty:ty
            ),* $(,)?
        }
    ) => {
        $crate::__model_struct! {
            $(#[$meta])*
            pub struct $name => $builder {
                $($(#[$fmeta])* $field ($setter): $ty),*
            }
        }

        impl $builder {
            #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`].")]
            pub fn build(self) -> $name {
                $name {
                    $($field: self.$field,)*
                }
            }
        }
    };
}

/// Declare an operation input. `build` runs the input's [`ValidateInput`](crate::ValidateInput)
/// implementation before returning it.
#[macro_export]
macro_rules! input {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $builder:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident ($setter:ident): $ty:ty
            ),* $(,)?
        }
    ) => {
        $crate::__model_struct! {
            $(#[$meta])*
            pub struct $name => $builder {
                $($(#[$fmeta])* $field ($setter): $ty),*
            }
        }

        impl $builder {
            #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`].")]
            ///
            /// Fails if a required field is unset or a field is outside its declared bounds.
            pub fn build(self) -> Result<$name, $crate::BuildError> {
                let input = $name {
                    $($field: self.$field,)*
                };
                $crate::ValidateInput::validate(&input)?;
                Ok(input)
            }
        }
    };
}

/// Connect a list operation's input and output through their `next_token` fields.
#[macro_export]
macro_rules! paginated {
    ($input:ident => $output:ident) => {
        impl $crate::PaginatedInput for $input {
            type Output = $output;

            fn next_token(&self) -> Option<&str> {
                self.next_token.as_deref()
            }

            fn max_results(&self) -> Option<i32> {
                self.max_results
            }

            fn set_next_token(&mut self, token: Option<String>) {
                self.next_token = token;
            }
        }

        impl $crate::PaginatedOutput for $output {
            fn next_token(&self) -> Option<&str> {
                self.next_token.as_deref()
            }
        }
    };
}

/// Add-only entry methods for a builder's map fields.
///
/// ```ignore
/// map_entries! {
///     ResourceBuilder {
///         tags: add_tags_entry, clear_tags_entries (String => String);
///     }
/// }
/// ```
#[macro_export]
macro_rules! map_entries {
    (
        $builder:ident {
            $($field:ident: $add:ident, $clear:ident ($key:ty => $value:ty);)+
        }
    ) => {
        impl $builder {
            $(
                #[doc = concat!("Adds an entry to `", stringify!($field), "`. Fails if the key was already added.")]
                pub fn $add(
                    mut self,
                    key: impl Into<$key>,
                    value: impl Into<$value>,
                ) -> Result<Self, $crate::DuplicateKeyError> {
                    $crate::map::insert_unique(&mut self.$field, key.into(), value.into())?;
                    Ok(self)
                }

                #[doc = concat!("Resets `", stringify!($field), "` to unset.")]
                pub fn $clear(mut self) -> Self {
                    self.$field = None;
                    self
                }
            )+
        }
    };
}
