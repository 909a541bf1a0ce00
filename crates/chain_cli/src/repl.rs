//! Interactive chain builder.
//!
//! Elements are collected through prompts (name, kind, dimensions, cell
//! values), the chain formula is previewed after every change, and
//! `calc` runs the evaluator. Invalid input aborts the current command
//! with a message and leaves the chain untouched.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use chain_ast::{chain_formula, ChainElement, Fraction, Matrix, Op, Value};

use crate::format::render_value;

pub fn run() -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut chain: Vec<ChainElement> = Vec::new();

    println!("Exact matrix chain calculator. Type 'help' for commands.");
    loop {
        let line = match editor.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(&line);

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        match command {
            "help" => print_help(),
            "add" => match read_element(&mut editor, chain.len()) {
                Ok(element) => {
                    chain.push(element);
                    print_formula(&chain);
                }
                Err(message) => println!("{message}"),
            },
            "remove" => remove_element(&mut chain, parts.next()),
            "op" => change_operation(&mut chain, parts.next(), parts.next()),
            "show" => show_chain(&chain),
            "formula" => print_formula(&chain),
            "calc" => calculate(&chain),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', type 'help'"),
        }
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  add                 add a chain element (prompts for details)");
    println!("  remove <index>      remove element <index> (1-based)");
    println!("  op <index> <sym>    set the operation of element <index> to + - * / or ^");
    println!("  show                list elements with their values");
    println!("  formula             preview the chain formula");
    println!("  calc                evaluate the chain");
    println!("  quit                leave");
}

fn prompt(editor: &mut DefaultEditor, label: &str) -> Result<String, String> {
    match editor.readline(label) {
        Ok(line) => Ok(line.trim().to_string()),
        Err(_) => Err("input cancelled".to_string()),
    }
}

fn read_element(editor: &mut DefaultEditor, position: usize) -> Result<ChainElement, String> {
    let name = prompt(editor, "name: ")?;
    let kind = prompt(editor, "kind (matrix/scalar): ")?;
    let value = match kind.as_str() {
        "matrix" => Value::Matrix(read_matrix(editor)?),
        "scalar" => {
            let text = prompt(editor, "value (e.g. 2/3): ")?;
            Value::Scalar(Fraction::parse(&text).map_err(|err| err.to_string())?)
        }
        other => return Err(format!("unknown kind '{other}'")),
    };

    // the first element never carries an operation
    let op = if position == 0 {
        None
    } else {
        let symbol = prompt(editor, "operation (+ - * / ^): ")?;
        Some(Op::from_symbol(&symbol).ok_or_else(|| format!("unknown operation '{symbol}'"))?)
    };

    Ok(ChainElement { name, value, op })
}

fn read_matrix(editor: &mut DefaultEditor) -> Result<Matrix, String> {
    let rows: usize = prompt(editor, "rows: ")?
        .parse()
        .map_err(|_| "invalid row count".to_string())?;
    let cols: usize = prompt(editor, "columns: ")?
        .parse()
        .map_err(|_| "invalid column count".to_string())?;
    if rows == 0 || cols == 0 {
        return Err("matrix needs at least one row and one column".to_string());
    }

    let mut grid = Vec::with_capacity(rows);
    for i in 0..rows {
        let line = prompt(editor, &format!("row {} (cells separated by spaces): ", i + 1))?;
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() != cols {
            return Err(format!(
                "row {} has {} cells, expected {}",
                i + 1,
                cells.len(),
                cols
            ));
        }
        let row = cells
            .iter()
            .map(|cell| Fraction::parse(cell))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| err.to_string())?;
        grid.push(row);
    }
    Matrix::from_rows(grid).map_err(|err| err.to_string())
}

fn remove_element(chain: &mut Vec<ChainElement>, raw_index: Option<&str>) {
    let parsed = raw_index.and_then(|raw| raw.parse::<usize>().ok());
    let Some(index) = parsed.filter(|i| (1..=chain.len()).contains(i)) else {
        println!("usage: remove <index> (1..{})", chain.len());
        return;
    };
    chain.remove(index - 1);
    // the element that moved to the front loses its operation
    if let Some(first) = chain.first_mut() {
        first.op = None;
    }
    print_formula(chain);
}

fn change_operation(chain: &mut [ChainElement], raw_index: Option<&str>, symbol: Option<&str>) {
    let parsed = raw_index.and_then(|raw| raw.parse::<usize>().ok());
    let (Some(index), Some(symbol)) = (parsed, symbol) else {
        println!("usage: op <index> <+|-|*|/|^>");
        return;
    };
    if index < 2 || index > chain.len() {
        println!("only elements 2..{} carry an operation", chain.len());
        return;
    }
    match Op::from_symbol(symbol) {
        Some(op) => {
            chain[index - 1].op = Some(op);
            print_formula(chain);
        }
        None => println!("unknown operation '{symbol}'"),
    }
}

fn show_chain(chain: &[ChainElement]) {
    if chain.is_empty() {
        println!("the chain is empty, use 'add'");
        return;
    }
    for (index, element) in chain.iter().enumerate() {
        let op = element
            .op
            .map(|op| format!(" [{op}]"))
            .unwrap_or_default();
        let label = if element.name.is_empty() {
            format!("#{}", index + 1)
        } else {
            element.name.clone()
        };
        println!("{}. {label}{op}", index + 1);
        for line in render_value(&element.value).lines() {
            println!("   {line}");
        }
    }
}

fn print_formula(chain: &[ChainElement]) {
    if chain.is_empty() {
        return;
    }
    println!("{} =", chain_formula(chain));
}

fn calculate(chain: &[ChainElement]) {
    if chain.is_empty() {
        println!("add at least one element first");
        return;
    }
    print_formula(chain);
    match chain_engine::evaluate(chain) {
        Ok(value) => println!("{}", render_value(&value)),
        Err(err) => println!("error: {err}"),
    }
}
