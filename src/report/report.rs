use crate::{
    lexer::tokens::Token,
    parser::symbols::{Procedure, SymbolTable, Variable},
};

/// Rendered in place of an address range that was never set.
const UNSET_ADDRESS: &str = "-1";

const VARIABLE_HEADER: &str = "         VarName      ProduceName  Level  Type  Address Kind\n";
const PROCEDURE_HEADER: &str =
    "     ProduceName     Type  Level  FirstVarAddress  LastVarAddress\n";

/// One `text  id NAME` row per token.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}

fn format_variable(symbols: &SymbolTable, variable: &Variable) -> String {
    format!(
        "{:>16} {:>16}  {:>5} {:>4} {:>5} {:>5}\n",
        variable.name,
        symbols.owner_name(variable),
        variable.level,
        variable.ty.name(),
        variable.address,
        variable.kind.code()
    )
}

pub fn format_variables(symbols: &SymbolTable) -> String {
    let mut out = String::from(VARIABLE_HEADER);
    for variable in symbols.variables() {
        out.push_str(&format_variable(symbols, variable));
    }
    out
}

fn address(address: Option<usize>) -> String {
    address.map_or_else(|| String::from(UNSET_ADDRESS), |a| a.to_string())
}

fn format_procedure(procedure: &Procedure) -> String {
    format!(
        "{:>16}  {:>7}  {:>5}  {:>15}  {:>14}\n",
        procedure.name,
        procedure.ty.name(),
        procedure.level,
        address(procedure.first_address),
        address(procedure.last_address)
    )
}

pub fn format_procedures(symbols: &SymbolTable) -> String {
    let mut out = String::from(PROCEDURE_HEADER);
    for procedure in symbols.procedures() {
        out.push_str(&format_procedure(procedure));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::lexer::tokenize, parser::parser::parse, read_words};

    #[test]
    fn test_format_tokens() {
        let lexer = tokenize(&read_words("x:=1"));

        assert_eq!(
            format_tokens(lexer.tokens()),
            concat!(
                "               x  10 IDENT\n",
                "              :=  20 ASSIGN\n",
                "               1  11 NUMBER\n",
                "            EOLN  24 END_OF_LINE\n",
                "             EOF  25 END_OF_FILE\n",
            )
        );
    }

    #[test]
    fn test_format_tables() {
        let lexer = tokenize(&read_words(
            "begin integer function f(p); begin integer p; write(p) end; f := 1 end",
        ));
        let (parser, _) = parse(lexer.into_tokens());

        let variables = format_variables(parser.symbols());
        let rows: Vec<&str> = variables.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "         VarName      ProduceName  Level  Type  Address Kind");
        assert_eq!(rows[1], "               p                f      2 INTEGER     1     1");

        let procedures = format_procedures(parser.symbols());
        let rows: Vec<&str> = procedures.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            "     ProduceName     Type  Level  FirstVarAddress  LastVarAddress"
        );
        assert_eq!(
            rows[1],
            "            main  INTEGER      0               -1              -1"
        );
        assert_eq!(
            rows[2],
            "               f  INTEGER      1                1               1"
        );
    }
}
