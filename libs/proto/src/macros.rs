//! Message definition macro.
//!
//! `proto_message!` turns a declarative field table into the full per-type
//! surface: the value-object struct, validated construction, presence and
//! value accessors, the chained builder, and the codec bridge through the
//! [`Message`](crate::schema::Message) trait. One engine, many
//! instantiations; adding a message type is a table, not a module of
//! hand-rolled plumbing.
//!
//! Grammar, one line per field:
//!
//! ```text
//! required  u64|u32|bool|fixed64|string|bytes  name = tag;
//! optional  u64|u32|bool|fixed64|string|bytes  name = tag;
//! optional  enum(Type)                         name = tag;
//! optional  message(Type)                      name = tag;
//! repeated  u64                                name = tag;
//! repeated  message(Type)                      name = tag;
//! ```
//!
//! Required fields become plain struct state extracted at construction;
//! nested and repeated fields are pre-built children; optional scalars are
//! served straight from the backing record so presence and value never
//! disagree.
//!
//! Implementation note: the muncher accumulates per-field token groups and
//! emits everything from the terminal arm. The record binder ident is
//! introduced once in the entry arm and threaded through, so the extraction
//! statements and the `from_record` parameter share one hygiene context.

macro_rules! proto_message {
    (
        $(#[$meta:meta])*
        pub struct $Name:ident {
            $($fields:tt)*
        }
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name (record)
            fields = [ $($fields)* ]
            members = [ ]
            extracts = [ ]
            inits = [ ]
            defs = [ ]
            tags = [ ]
            bparams = [ ]
            bsets = [ ]
            accessors = [ ]
            setters = [ ]
        }
    };

    // All fields consumed: emit the type, its trait impl, and its builder.
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct $Name {
                record: courier_wire::WireRecord,
                $($members)*
            }

            impl $crate::schema::Message for $Name {
                const NAME: &'static str = stringify!($Name);
                const FIELDS: &'static [$crate::schema::FieldDef] = &[ $($defs)* ];
                const TAGS: &'static [u32] = &[ $($tags)* ];

                fn from_record(
                    $record: courier_wire::WireRecord,
                ) -> $crate::error::ProtoResult<Self> {
                    $crate::schema::check_record(Self::FIELDS, &$record)?;
                    $($extracts)*
                    Ok(Self { record: $record, $($inits)* })
                }

                fn record(&self) -> &courier_wire::WireRecord {
                    &self.record
                }
            }

            impl $Name {
                #[doc = "Start a builder for [`" $Name "`] with every required field set."]
                pub fn builder( $($bparams)* ) -> [<$Name Builder>] {
                    [<$Name Builder>] {
                        record: courier_wire::WireRecord::new(),
                    }
                    $($bsets)*
                }

                #[doc = "Seed a builder with every field of this value, unrecognized bytes included."]
                pub fn to_builder(&self) -> [<$Name Builder>] {
                    [<$Name Builder>] {
                        record: self.record.clone(),
                    }
                }

                $($accessors)*
            }

            #[doc = "Chained builder for [`" $Name "`]. Single-owner scratch space; validation happens once, in `build`."]
            #[derive(Debug, Clone, Default)]
            pub struct [<$Name Builder>] {
                record: courier_wire::WireRecord,
            }

            impl [<$Name Builder>] {
                #[doc = "Validate and build the immutable [`" $Name "`]."]
                pub fn build(self) -> $crate::error::ProtoResult<$Name> {
                    <$Name as $crate::schema::Message>::from_record(self.record)
                }

                $($setters)*
            }
        }
    };

    // required u64
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ required u64 $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* $name: u64, ]
            extracts = [ $($extracts)*
                let $name = $crate::schema::require_u64(
                    &$record,
                    Self::NAME,
                    stringify!($name),
                    $tag,
                )?;
            ]
            inits = [ $($inits)* $name, ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Required,
                    kind: $crate::schema::FieldKind::U64,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* $name: u64, ]
            bsets = [ $($bsets)* . [<set_ $name>]($name) ]
            accessors = [ $($accessors)*
                pub fn $name(&self) -> u64 {
                    self.$name
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: u64) -> Self {
                    self.record.set_varint($tag, value);
                    self
                }
            ]
        }
    };

    // required u32
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ required u32 $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* $name: u32, ]
            extracts = [ $($extracts)*
                let $name = $crate::schema::require_u32(
                    &$record,
                    Self::NAME,
                    stringify!($name),
                    $tag,
                )?;
            ]
            inits = [ $($inits)* $name, ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Required,
                    kind: $crate::schema::FieldKind::U32,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* $name: u32, ]
            bsets = [ $($bsets)* . [<set_ $name>]($name) ]
            accessors = [ $($accessors)*
                pub fn $name(&self) -> u32 {
                    self.$name
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: u32) -> Self {
                    self.record.set_u32($tag, value);
                    self
                }
            ]
        }
    };

    // required bool
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ required bool $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* $name: bool, ]
            extracts = [ $($extracts)*
                let $name = $crate::schema::require_bool(
                    &$record,
                    Self::NAME,
                    stringify!($name),
                    $tag,
                )?;
            ]
            inits = [ $($inits)* $name, ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Required,
                    kind: $crate::schema::FieldKind::Bool,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* $name: bool, ]
            bsets = [ $($bsets)* . [<set_ $name>]($name) ]
            accessors = [ $($accessors)*
                pub fn $name(&self) -> bool {
                    self.$name
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: bool) -> Self {
                    self.record.set_bool($tag, value);
                    self
                }
            ]
        }
    };

    // required fixed64
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ required fixed64 $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* $name: u64, ]
            extracts = [ $($extracts)*
                let $name = $crate::schema::require_fixed64(
                    &$record,
                    Self::NAME,
                    stringify!($name),
                    $tag,
                )?;
            ]
            inits = [ $($inits)* $name, ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Required,
                    kind: $crate::schema::FieldKind::Fixed64,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* $name: u64, ]
            bsets = [ $($bsets)* . [<set_ $name>]($name) ]
            accessors = [ $($accessors)*
                pub fn $name(&self) -> u64 {
                    self.$name
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: u64) -> Self {
                    self.record.set_fixed64($tag, value);
                    self
                }
            ]
        }
    };

    // required string
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ required string $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* $name: String, ]
            extracts = [ $($extracts)*
                let $name = $crate::schema::require_string(
                    &$record,
                    Self::NAME,
                    stringify!($name),
                    $tag,
                )?;
            ]
            inits = [ $($inits)* $name, ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Required,
                    kind: $crate::schema::FieldKind::Str,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* $name: &str, ]
            bsets = [ $($bsets)* . [<set_ $name>]($name) ]
            accessors = [ $($accessors)*
                pub fn $name(&self) -> &str {
                    &self.$name
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: &str) -> Self {
                    self.record.set_str($tag, value);
                    self
                }
            ]
        }
    };

    // required bytes
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ required bytes $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* $name: Vec<u8>, ]
            extracts = [ $($extracts)*
                let $name = $crate::schema::require_bytes(
                    &$record,
                    Self::NAME,
                    stringify!($name),
                    $tag,
                )?;
            ]
            inits = [ $($inits)* $name, ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Required,
                    kind: $crate::schema::FieldKind::Bytes,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* $name: Vec<u8>, ]
            bsets = [ $($bsets)* . [<set_ $name>]($name) ]
            accessors = [ $($accessors)*
                pub fn $name(&self) -> &[u8] {
                    &self.$name
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: Vec<u8>) -> Self {
                    self.record.set_bytes($tag, value);
                    self
                }
            ]
        }
    };

    // optional message(Type)
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ optional message ($fty:ty) $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* $name: Option<$fty>, ]
            extracts = [ $($extracts)*
                let $name = $crate::schema::optional_message::<$fty>(&$record, $tag)?;
            ]
            inits = [ $($inits)* $name, ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Optional,
                    kind: $crate::schema::FieldKind::Message,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                pub fn [<has_ $name>](&self) -> bool {
                    self.$name.is_some()
                }

                pub fn $name(&self) -> Option<&$fty> {
                    self.$name.as_ref()
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: &$fty) -> Self {
                    self.record
                        .set_bytes($tag, <$fty as $crate::schema::Message>::encode(value));
                    self
                }
            ]
        }
    };

    // optional enum(Type)
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ optional enum ($fty:ty) $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* ]
            extracts = [ $($extracts)* ]
            inits = [ $($inits)* ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Optional,
                    kind: $crate::schema::FieldKind::Enum,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                #[doc = "Presence of `" $name "`, recognized case or not."]
                pub fn [<has_ $name>](&self) -> bool {
                    self.record.has($tag)
                }

                #[doc = "Typed value of `" $name "`: None when absent or when the wire value is not a recognized case. The raw integer stays in the record either way."]
                pub fn $name(&self) -> Option<$fty> {
                    self.record
                        .u64_at($tag)
                        .and_then(<$fty as $crate::schema::WireEnum>::from_wire)
                }

                #[doc = "Unchecked form of [`Self::" $name "`]: substitutes the default case, logging loudly, when no typed value is available."]
                pub fn [<$name _unchecked>](&self) -> $fty {
                    $crate::schema::enum_or_default::<$fty>(
                        <Self as $crate::schema::Message>::NAME,
                        stringify!($name),
                        self.record.u64_at($tag),
                    )
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: $fty) -> Self {
                    self.record
                        .set_varint($tag, <$fty as $crate::schema::WireEnum>::to_wire(value));
                    self
                }
            ]
        }
    };

    // optional u64
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ optional u64 $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* ]
            extracts = [ $($extracts)* ]
            inits = [ $($inits)* ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Optional,
                    kind: $crate::schema::FieldKind::U64,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                pub fn [<has_ $name>](&self) -> bool {
                    self.record.has($tag)
                }

                pub fn $name(&self) -> Option<u64> {
                    self.record.u64_at($tag)
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: u64) -> Self {
                    self.record.set_varint($tag, value);
                    self
                }
            ]
        }
    };

    // optional u32
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ optional u32 $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* ]
            extracts = [ $($extracts)* ]
            inits = [ $($inits)* ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Optional,
                    kind: $crate::schema::FieldKind::U32,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                pub fn [<has_ $name>](&self) -> bool {
                    self.record.has($tag)
                }

                pub fn $name(&self) -> Option<u32> {
                    self.record.u32_at($tag)
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: u32) -> Self {
                    self.record.set_u32($tag, value);
                    self
                }
            ]
        }
    };

    // optional bool
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ optional bool $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* ]
            extracts = [ $($extracts)* ]
            inits = [ $($inits)* ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Optional,
                    kind: $crate::schema::FieldKind::Bool,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                pub fn [<has_ $name>](&self) -> bool {
                    self.record.has($tag)
                }

                pub fn $name(&self) -> Option<bool> {
                    self.record.bool_at($tag)
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: bool) -> Self {
                    self.record.set_bool($tag, value);
                    self
                }
            ]
        }
    };

    // optional fixed64
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ optional fixed64 $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* ]
            extracts = [ $($extracts)* ]
            inits = [ $($inits)* ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Optional,
                    kind: $crate::schema::FieldKind::Fixed64,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                pub fn [<has_ $name>](&self) -> bool {
                    self.record.has($tag)
                }

                pub fn $name(&self) -> Option<u64> {
                    self.record.fixed64_at($tag)
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: u64) -> Self {
                    self.record.set_fixed64($tag, value);
                    self
                }
            ]
        }
    };

    // optional string
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ optional string $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* ]
            extracts = [ $($extracts)* ]
            inits = [ $($inits)* ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Optional,
                    kind: $crate::schema::FieldKind::Str,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                pub fn [<has_ $name>](&self) -> bool {
                    self.record.has($tag)
                }

                pub fn $name(&self) -> Option<&str> {
                    self.record.str_at($tag)
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: &str) -> Self {
                    self.record.set_str($tag, value);
                    self
                }
            ]
        }
    };

    // optional bytes
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ optional bytes $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* ]
            extracts = [ $($extracts)* ]
            inits = [ $($inits)* ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Optional,
                    kind: $crate::schema::FieldKind::Bytes,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                pub fn [<has_ $name>](&self) -> bool {
                    self.record.has($tag)
                }

                pub fn $name(&self) -> Option<&[u8]> {
                    self.record.bytes_at($tag)
                }
            ]
            setters = [ $($setters)*
                pub fn [<set_ $name>](mut self, value: Vec<u8>) -> Self {
                    self.record.set_bytes($tag, value);
                    self
                }
            ]
        }
    };

    // repeated message(Type)
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ repeated message ($fty:ty) $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* $name: Vec<$fty>, ]
            extracts = [ $($extracts)*
                let $name = $crate::schema::repeated_message::<$fty>(&$record, $tag)?;
            ]
            inits = [ $($inits)* $name, ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Repeated,
                    kind: $crate::schema::FieldKind::Message,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                #[doc = "Every `" $name "` entry, in wire order."]
                pub fn $name(&self) -> &[$fty] {
                    &self.$name
                }
            ]
            setters = [ $($setters)*
                #[doc = "Append one entry to `" $name "`."]
                pub fn [<add_ $name>](mut self, value: &$fty) -> Self {
                    self.record
                        .push_bytes($tag, <$fty as $crate::schema::Message>::encode(value));
                    self
                }

                #[doc = "Replace `" $name "` wholesale."]
                pub fn [<set_ $name>](mut self, values: &[$fty]) -> Self {
                    self.record.clear($tag);
                    for value in values {
                        self.record
                            .push_bytes($tag, <$fty as $crate::schema::Message>::encode(value));
                    }
                    self
                }
            ]
        }
    };

    // repeated u64
    (
        @munch $(#[$meta:meta])* $Name:ident ($record:ident)
        fields = [ repeated u64 $name:ident = $tag:tt; $($rest:tt)* ]
        members = [ $($members:tt)* ]
        extracts = [ $($extracts:tt)* ]
        inits = [ $($inits:tt)* ]
        defs = [ $($defs:tt)* ]
        tags = [ $($tags:tt)* ]
        bparams = [ $($bparams:tt)* ]
        bsets = [ $($bsets:tt)* ]
        accessors = [ $($accessors:tt)* ]
        setters = [ $($setters:tt)* ]
    ) => {
        $crate::macros::proto_message! {
            @munch $(#[$meta])* $Name ($record)
            fields = [ $($rest)* ]
            members = [ $($members)* $name: Vec<u64>, ]
            extracts = [ $($extracts)*
                let $name = $crate::schema::repeated_u64(&$record, $tag)?;
            ]
            inits = [ $($inits)* $name, ]
            defs = [ $($defs)*
                $crate::schema::FieldDef {
                    name: stringify!($name),
                    tag: $tag,
                    cardinality: $crate::schema::Cardinality::Repeated,
                    kind: $crate::schema::FieldKind::U64,
                },
            ]
            tags = [ $($tags)* $tag, ]
            bparams = [ $($bparams)* ]
            bsets = [ $($bsets)* ]
            accessors = [ $($accessors)*
                #[doc = "Every `" $name "` value, in wire order."]
                pub fn $name(&self) -> &[u64] {
                    &self.$name
                }
            ]
            setters = [ $($setters)*
                #[doc = "Append one value to `" $name "`."]
                pub fn [<add_ $name>](mut self, value: u64) -> Self {
                    self.record.push_varint($tag, value);
                    self
                }

                #[doc = "Replace `" $name "` wholesale."]
                pub fn [<set_ $name>](mut self, values: &[u64]) -> Self {
                    self.record.clear($tag);
                    for value in values {
                        self.record.push_varint($tag, *value);
                    }
                    self
                }
            ]
        }
    };
}

pub(crate) use proto_message;
