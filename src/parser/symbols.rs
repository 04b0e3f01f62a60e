//! Variable and procedure tables plus the static scope stack.
//!
//! Both tables are append-only. Variables point at their owning procedure
//! by index, and the scope stack holds indices into the procedure table.
//! Lookups only see entries owned by (or, for procedures, declared in) a
//! procedure on the scope stack, and prefer the innermost one (highest
//! level, then latest declaration). Siblings never see each other's names.

use crate::errors::errors::ErrorImpl;

/// Name of the synthetic procedure wrapping the top-level program.
pub const MAIN_PROCEDURE: &str = "main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Integer => "INTEGER",
        }
    }
}

/// A parameter starts out unconfirmed and becomes usable once the body
/// re-declares it as a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Variable,
    Parameter,
    ConfirmedParameter,
}

impl VariableKind {
    /// Column value in the variable table: 0 for variables, 1 for parameters.
    pub fn code(&self) -> u8 {
        match self {
            VariableKind::Variable => 0,
            VariableKind::Parameter | VariableKind::ConfirmedParameter => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    /// Index into the procedure table.
    pub procedure: usize,
    pub kind: VariableKind,
    pub ty: ValueType,
    pub level: usize,
    pub address: usize,
}

impl Variable {
    pub fn is_parameter(&self) -> bool {
        self.kind.code() == 1
    }

    pub fn is_declared(&self) -> bool {
        self.kind != VariableKind::Parameter
    }

    /// `Parameter -> ConfirmedParameter`. Returns whether the state changed.
    pub fn confirm(&mut self) -> bool {
        if self.kind == VariableKind::Parameter {
            self.kind = VariableKind::ConfirmedParameter;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Procedure {
    pub name: String,
    pub ty: ValueType,
    pub level: usize,
    /// Procedure whose body declares this one; `None` for main.
    pub parent: Option<usize>,
    pub first_address: Option<usize>,
    pub last_address: Option<usize>,
}

/// Outcome of a variable lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found(usize),
    /// Visible, but a parameter that has not been confirmed yet.
    Unconfirmed(usize),
    Missing,
}

/// Outcome of a registration. Duplicates are still appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declared {
    Added(usize),
    Duplicate(usize),
    Confirmed(usize),
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: Vec<Variable>,
    procedures: Vec<Procedure>,
    scopes: Vec<usize>,
    current_address: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn current_scope(&self) -> Option<usize> {
        self.scopes.last().copied()
    }

    pub fn owner_name(&self, variable: &Variable) -> &str {
        &self.procedures[variable.procedure].name
    }

    fn require_scope(&self, name: &str) -> Result<usize, ErrorImpl> {
        self.current_scope().ok_or_else(|| ErrorImpl::NoEnclosingScope {
            name: String::from(name),
        })
    }

    /// Whether `procedure` is on the scope stack, i.e. encloses the current
    /// position.
    fn is_open(&self, procedure: usize) -> bool {
        self.scopes.contains(&procedure)
    }

    fn innermost_variable(&self, name: &str, parameters_only: bool) -> Option<usize> {
        self.variables
            .iter()
            .enumerate()
            .filter(|(_, v)| v.name == name && self.is_open(v.procedure))
            .filter(|(_, v)| !parameters_only || v.is_parameter())
            .max_by_key(|(index, v)| (v.level, *index))
            .map(|(index, _)| index)
    }

    fn append_variable(&mut self, name: &str, owner: usize, kind: VariableKind) -> usize {
        self.current_address += 1;
        self.variables.push(Variable {
            name: String::from(name),
            procedure: owner,
            kind,
            ty: ValueType::Integer,
            level: self.depth(),
            address: self.current_address,
        });
        self.update_procedure_variable_addresses(owner);
        self.variables.len() - 1
    }

    /// Declares `name` as a variable of the current scope. A visible
    /// parameter of the same name is confirmed instead of adding a row.
    pub fn register_variable(&mut self, name: &str) -> Result<Declared, ErrorImpl> {
        let owner = self.require_scope(name)?;

        if let Some(index) = self.find_parameter(name) {
            self.variables[index].confirm();
            return Ok(Declared::Confirmed(index));
        }

        let duplicate = self
            .variables
            .iter()
            .any(|v| v.name == name && v.procedure == owner);
        let index = self.append_variable(name, owner, VariableKind::Variable);

        Ok(if duplicate {
            Declared::Duplicate(index)
        } else {
            Declared::Added(index)
        })
    }

    pub fn register_parameter(&mut self, name: &str) -> Result<Declared, ErrorImpl> {
        let owner = self.require_scope(name)?;

        let duplicate = self
            .variables
            .iter()
            .any(|v| v.name == name && v.is_parameter() && v.procedure == owner);
        let index = self.append_variable(name, owner, VariableKind::Parameter);

        Ok(if duplicate {
            Declared::Duplicate(index)
        } else {
            Declared::Added(index)
        })
    }

    pub fn find_variable(&self, name: &str) -> Resolution {
        match self.innermost_variable(name, false) {
            Some(index) if self.variables[index].is_declared() => Resolution::Found(index),
            Some(index) => Resolution::Unconfirmed(index),
            None => Resolution::Missing,
        }
    }

    pub fn find_parameter(&self, name: &str) -> Option<usize> {
        self.innermost_variable(name, true)
    }

    /// Appends a procedure at the current depth and opens its scope.
    pub fn register_procedure(&mut self, name: &str) -> Declared {
        let level = self.depth();
        let parent = self.current_scope();
        let duplicate = self
            .procedures
            .iter()
            .any(|p| p.name == name && p.level == level);

        self.procedures.push(Procedure {
            name: String::from(name),
            ty: ValueType::Integer,
            level,
            parent,
            first_address: None,
            last_address: None,
        });
        let index = self.procedures.len() - 1;
        self.scopes.push(index);

        if duplicate {
            Declared::Duplicate(index)
        } else {
            Declared::Added(index)
        }
    }

    /// A procedure is visible while the body that declared it is open,
    /// which includes its own body.
    pub fn find_procedure(&self, name: &str) -> Option<usize> {
        self.procedures
            .iter()
            .enumerate()
            .filter(|(_, p)| p.name == name && p.parent.map_or(true, |parent| self.is_open(parent)))
            .max_by_key(|(index, p)| (p.level, *index))
            .map(|(index, _)| index)
    }

    pub fn close_scope(&mut self) -> Option<usize> {
        self.scopes.pop()
    }

    fn update_procedure_variable_addresses(&mut self, owner: usize) {
        let procedure = &mut self.procedures[owner];
        if procedure.first_address.is_none() {
            procedure.first_address = Some(self.current_address);
        }
        procedure.last_address = Some(self.current_address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_main() -> SymbolTable {
        let mut table = SymbolTable::new();
        table.register_procedure(MAIN_PROCEDURE);
        table
    }

    #[test]
    fn test_main_procedure_level() {
        let table = table_with_main();

        assert_eq!(table.procedures()[0].level, 0);
        assert_eq!(table.depth(), 1);
        assert_eq!(table.procedures()[0].first_address, None);
        assert_eq!(table.procedures()[0].last_address, None);
    }

    #[test]
    fn test_register_variable_outside_scope() {
        let mut table = SymbolTable::new();

        assert_eq!(
            table.register_variable("x"),
            Err(ErrorImpl::NoEnclosingScope {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn test_addresses_are_global() {
        let mut table = table_with_main();
        table.register_variable("a").unwrap();
        table.register_procedure("f");
        table.register_parameter("p").unwrap();
        table.register_variable("b").unwrap();
        table.close_scope();
        table.register_variable("c").unwrap();

        let addresses: Vec<usize> = table.variables().iter().map(|v| v.address).collect();
        assert_eq!(addresses, vec![1, 2, 3, 4]);

        let main = &table.procedures()[0];
        assert_eq!((main.first_address, main.last_address), (Some(1), Some(4)));
        let f = &table.procedures()[1];
        assert_eq!((f.first_address, f.last_address), (Some(2), Some(3)));
        assert_eq!(f.level, 1);
    }

    #[test]
    fn test_duplicate_variable_still_appended() {
        let mut table = table_with_main();

        assert_eq!(table.register_variable("x"), Ok(Declared::Added(0)));
        assert_eq!(table.register_variable("x"), Ok(Declared::Duplicate(1)));
        assert_eq!(table.variables().len(), 2);
        assert_eq!(table.variables()[1].address, 2);
    }

    #[test]
    fn test_parameter_confirmation() {
        let mut table = table_with_main();
        table.register_procedure("f");
        table.register_parameter("p").unwrap();

        assert_eq!(table.find_variable("p"), Resolution::Unconfirmed(0));
        assert_eq!(table.register_variable("p"), Ok(Declared::Confirmed(0)));
        assert_eq!(table.variables().len(), 1);
        assert_eq!(table.variables()[0].kind, VariableKind::ConfirmedParameter);
        assert_eq!(table.find_variable("p"), Resolution::Found(0));
    }

    #[test]
    fn test_confirm_transition() {
        let mut table = table_with_main();
        table.register_procedure("f");
        table.register_parameter("p").unwrap();
        let mut parameter = table.variables()[0].clone();

        assert!(!parameter.is_declared());
        assert!(parameter.confirm());
        assert!(parameter.is_declared());
        assert!(parameter.is_parameter());
        assert!(!parameter.confirm());
    }

    #[test]
    fn test_duplicate_parameter() {
        let mut table = table_with_main();
        table.register_procedure("f");

        assert_eq!(table.register_parameter("p"), Ok(Declared::Added(0)));
        assert_eq!(table.register_parameter("p"), Ok(Declared::Duplicate(1)));
    }

    #[test]
    fn test_innermost_variable_wins() {
        let mut table = table_with_main();
        table.register_variable("x").unwrap();
        table.register_procedure("f");
        table.register_parameter("p").unwrap();
        table.register_variable("x").unwrap();

        assert_eq!(table.find_variable("x"), Resolution::Found(2));

        table.close_scope();
        assert_eq!(table.find_variable("x"), Resolution::Found(0));
    }

    #[test]
    fn test_inner_names_invisible_after_close() {
        let mut table = table_with_main();
        table.register_procedure("f");
        table.register_parameter("p").unwrap();
        table.register_procedure("g");
        table.close_scope();
        table.close_scope();

        assert_eq!(table.find_variable("p"), Resolution::Missing);
        assert_eq!(table.find_parameter("p"), None);
        assert_eq!(table.find_procedure("f"), Some(1));
        assert_eq!(table.find_procedure("g"), None);
    }

    #[test]
    fn test_sibling_scopes_are_invisible() {
        let mut table = table_with_main();
        table.register_variable("x").unwrap();
        table.register_procedure("f");
        table.register_parameter("x").unwrap();
        table.register_procedure("h");
        table.close_scope();
        table.close_scope();
        table.register_procedure("g");

        // f's unconfirmed parameter does not shadow main's x inside g
        assert_eq!(table.find_variable("x"), Resolution::Found(0));
        assert_eq!(table.find_parameter("x"), None);
        assert_eq!(table.find_procedure("f"), Some(1));
        assert_eq!(table.find_procedure("h"), None);
        assert_eq!(table.find_procedure("g"), Some(3));

        // declaring x in g adds a row instead of confirming f's parameter
        assert_eq!(table.register_variable("x"), Ok(Declared::Added(2)));
        assert_eq!(table.variables()[1].kind, VariableKind::Parameter);
        assert_eq!(table.procedures()[3].parent, Some(0));
    }

    #[test]
    fn test_duplicate_procedure_same_level() {
        let mut table = table_with_main();

        assert_eq!(table.register_procedure("f"), Declared::Added(1));
        table.close_scope();
        assert_eq!(table.register_procedure("f"), Declared::Duplicate(2));
        table.close_scope();
        table.register_procedure("g");
        // same name one level deeper is not a duplicate
        assert_eq!(table.register_procedure("f"), Declared::Added(4));
    }
}
