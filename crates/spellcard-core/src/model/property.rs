//! The fixed, ordered set of card properties.

use std::str::FromStr;

use crate::Error;

/// Where a property's database value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// A named TSV column.
    Column(&'static str),
    /// The level column of the class being generated.
    ClassLevel,
    /// Computed from the plain description.
    AttackRoll,
}

macro_rules! properties {
    ($($variant:ident => $name:literal, $source:expr;)+) => {
        /// One property line of a card.
        ///
        /// Variants are declared in emission order; [`PropertyName::ALL`]
        /// is the authoritative list of lines every card carries.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PropertyName {
            $($variant,)+
        }

        impl PropertyName {
            /// Every property in emission order.
            pub const ALL: &'static [PropertyName] = &[$(PropertyName::$variant,)+];

            /// Name as written in `\SpellProp{NAME}`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(PropertyName::$variant => $name,)+
                }
            }

            pub fn source(&self) -> ValueSource {
                match self {
                    $(PropertyName::$variant => $source,)+
                }
            }
        }

        impl FromStr for PropertyName {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(PropertyName::$variant),)+
                    _ => Err(Error::UnknownProperty { name: s.to_string() }),
                }
            }
        }
    };
}

use ValueSource::{AttackRoll, ClassLevel, Column};

properties! {
    Name => "name", Column("name");
    School => "school", Column("school");
    Subschool => "subschool", Column("subschool");
    Descriptor => "descriptor", Column("descriptor");
    SpellLevel => "spelllevel", ClassLevel;
    CastingTime => "castingtime", Column("casting_time");
    Components => "components", Column("components");
    CostlyComponents => "costlycomponents", Column("costly_components");
    Range => "range", Column("range");
    Area => "area", Column("area");
    Effect => "effect", Column("effect");
    Targets => "targets", Column("targets");
    Duration => "duration", Column("duration");
    Dismissible => "dismissible", Column("dismissible");
    Shapeable => "shapeable", Column("shapeable");
    SavingThrow => "savingthrow", Column("saving_throw");
    SpellResistance => "spellresistance", Column("spell_resistance");
    AttackRollKind => "attackroll", AttackRoll;
    Source => "source", Column("source");
    Verbal => "verbal", Column("verbal");
    Somatic => "somatic", Column("somatic");
    Material => "material", Column("material");
    Focus => "focus", Column("focus");
    DivineFocus => "divinefocus", Column("divine_focus");
    Deity => "deity", Column("deity");
    SlaLevel => "SLALevel", Column("SLA_Level");
    Domain => "domain", Column("domain");
    Acid => "acid", Column("acid");
    Air => "air", Column("air");
    Chaotic => "chaotic", Column("chaotic");
    Cold => "cold", Column("cold");
    Curse => "curse", Column("curse");
    Darkness => "darkness", Column("darkness");
    Death => "death", Column("death");
    Disease => "disease", Column("disease");
    Earth => "earth", Column("earth");
    Electricity => "electricity", Column("electricity");
    Emotion => "emotion", Column("emotion");
    Evil => "evil", Column("evil");
    Fear => "fear", Column("fear");
    Fire => "fire", Column("fire");
    Force => "force", Column("force");
    Good => "good", Column("good");
    LanguageDependent => "languagedependent", Column("language_dependent");
    Lawful => "lawful", Column("lawful");
    Light => "light", Column("light");
    MindAffecting => "mindaffecting", Column("mind_affecting");
    Pain => "pain", Column("pain");
    Poison => "poison", Column("poison");
    Shadow => "shadow", Column("shadow");
    Sonic => "sonic", Column("sonic");
    Water => "water", Column("water");
    LinkText => "linktext", Column("linktext");
    Id => "id", Column("id");
    MaterialCosts => "materialcosts", Column("material_costs");
    Bloodline => "bloodline", Column("bloodline");
    Patron => "patron", Column("patron");
    MythicText => "mythictext", Column("mythic_text");
    Augmented => "augmented", Column("augmented");
    HauntStatistics => "hauntstatistics", Column("haunt_statistics");
    Ruse => "ruse", Column("ruse");
    Draconic => "draconic", Column("draconic");
    Meditative => "meditative", Column("meditative");
}

impl PropertyName {
    /// Whether the database value goes through the LaTeX text fixes.
    pub fn needs_text_fixes(&self) -> bool {
        matches!(
            self,
            PropertyName::Range
                | PropertyName::Area
                | PropertyName::Effect
                | PropertyName::Targets
                | PropertyName::MythicText
        )
    }
}

impl std::fmt::Display for PropertyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
