//! Class members and the sections that group them.

/// A grouping of class members as exposed by the upstream model.
///
/// The grouping criteria (visibility, static-ness) are upstream's
/// concern; the conversion engine only iterates the members in order.
#[derive(Debug, Clone, Default)]
pub struct Section {
    members: Vec<Member>,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member.
    pub fn push_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl FromIterator<Member> for Section {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Section {
            members: iter.into_iter().collect(),
        }
    }
}

/// The kind of a class member.
///
/// Only functions and variables are rendered; every other upstream kind
/// (typedefs, enums, friends, ...) maps to [`MemberKind::Other`] and is
/// skipped by the section walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Function,
    Variable,
    Other,
}

impl MemberKind {
    /// Returns a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Other => "other",
        }
    }

    /// Maps an upstream kind keyword onto a member kind.
    ///
    /// Unrecognized keywords map to [`MemberKind::Other`] rather than
    /// failing; unknown member kinds never abort a run.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "function" => Self::Function,
            "variable" => Self::Variable,
            _ => Self::Other,
        }
    }
}

/// Member visibility.
///
/// [`Visibility::Unspecified`] is the permissive fallback for upstream
/// protection values outside the public/protected/private triple (for
/// example Doxygen's `package`); such members render without a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    Unspecified,
}

impl Visibility {
    /// Returns a human-readable name for this visibility.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Unspecified => "unspecified",
        }
    }

    /// Maps an upstream protection keyword onto a visibility.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            _ => Self::Unspecified,
        }
    }
}

/// A single class member: a field, a method, or something the engine
/// does not render.
#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    kind: MemberKind,
    visibility: Visibility,
    type_name: Option<String>,
}

impl Member {
    /// Creates a member with an explicit kind.
    ///
    /// `type_name` is only meaningful for [`MemberKind::Variable`].
    pub fn new(
        kind: MemberKind,
        name: impl Into<String>,
        visibility: Visibility,
        type_name: Option<String>,
    ) -> Self {
        Member {
            name: name.into(),
            kind,
            visibility,
            type_name,
        }
    }

    /// Creates a function member.
    pub fn function(name: impl Into<String>, visibility: Visibility) -> Self {
        Self::new(MemberKind::Function, name, visibility, None)
    }

    /// Creates a variable member with its declared type text.
    pub fn variable(
        name: impl Into<String>,
        type_name: impl Into<String>,
        visibility: Visibility,
    ) -> Self {
        Self::new(MemberKind::Variable, name, visibility, Some(type_name.into()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Declared type text, present for variables.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_kind_from_keyword() {
        assert_eq!(MemberKind::from_keyword("function"), MemberKind::Function);
        assert_eq!(MemberKind::from_keyword("variable"), MemberKind::Variable);
        assert_eq!(MemberKind::from_keyword("typedef"), MemberKind::Other);
        assert_eq!(MemberKind::from_keyword(""), MemberKind::Other);
    }

    #[test]
    fn test_visibility_from_keyword() {
        assert_eq!(Visibility::from_keyword("public"), Visibility::Public);
        assert_eq!(Visibility::from_keyword("protected"), Visibility::Protected);
        assert_eq!(Visibility::from_keyword("private"), Visibility::Private);
        assert_eq!(Visibility::from_keyword("package"), Visibility::Unspecified);
    }

    #[test]
    fn test_variable_carries_type_text() {
        let member = Member::variable("count", "int", Visibility::Private);
        assert_eq!(member.kind(), MemberKind::Variable);
        assert_eq!(member.type_name(), Some("int"));

        let method = Member::function("run", Visibility::Public);
        assert_eq!(method.type_name(), None);
    }

    #[test]
    fn test_section_order_is_preserved() {
        let section: Section = [
            Member::function("b", Visibility::Public),
            Member::function("a", Visibility::Public),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = section.members().iter().map(Member::name).collect();
        assert_eq!(names, ["b", "a"]);
    }
}
