use std::{fs, process::ExitCode};

use clap::Parser;
use exprtree::interpreter::{
    context::Context, lexer::tokenize, parser::ParenMatching, visitor::Strategy,
};

/// exprtree evaluates parenthesized addition and subtraction expressions such
/// as `(10+2)-(22-99)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprtree to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    /// The traversal used to print or evaluate the tree.
    #[arg(short, long, value_enum, default_value_t = Strategy::Classic)]
    strategy: Strategy,

    /// Prints the parenthesized tree instead of its value.
    #[arg(short, long)]
    render: bool,

    /// Pairs each `(` with the first following `)`, ignoring nesting.
    #[arg(long)]
    first_closing: bool,

    /// Prints the token stream to stderr before parsing.
    #[arg(long)]
    tokens: bool,

    /// Prints the tree's nodes in in-order sequence to stderr.
    #[arg(long)]
    inorder: bool,

    contents: String,
}

fn main() -> ExitCode {
    let mut args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        std::mem::take(&mut args.contents)
    };

    match run(&args, &source) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args, source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let matching = if args.first_closing {
        ParenMatching::FirstClosing
    } else {
        ParenMatching::Balanced
    };
    let context = Context::with_matching(matching);

    let tokens = tokenize(source);
    if args.tokens {
        let listing: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        eprintln!("[{}]", listing.join(", "));
    }

    let expr = context.parser.parse_tokens(&tokens)?;
    if args.inorder {
        let listing: Vec<String> = expr.inorder().map(|node| node.symbol()).collect();
        eprintln!("{}", listing.join(" "));
    }

    if args.render {
        Ok(context.render(&expr, args.strategy)?)
    } else {
        Ok(context.evaluate(&expr, args.strategy)?.to_string())
    }
}
