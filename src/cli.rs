//! Command-line interface: one subcommand per operation
//!
//! Every subcommand maps onto an [`Operation`]; lists are comma-delimited
//! (`--values 5,3,9`) and default to the demo data of the matching screen.

use algoviz::producers::{
    BinaryTree, Graph, ListKind, Operation, SortAlgorithm, Strategy, TraversalOrder,
};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Step-by-step algorithm visualizer
#[derive(Debug, Parser)]
#[command(name = "algoviz", version, about = "Step-by-step algorithm visualizer")]
pub struct Cli {
    /// Delay between two steps, in milliseconds
    #[arg(long, global = true, env = "ALGOVIZ_DELAY_MS", default_value_t = 800)]
    pub delay_ms: u64,

    /// Print every step to stdout instead of opening the TUI
    #[arg(long, global = true)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Integer list operand
#[derive(Debug, Args)]
pub struct Values {
    /// Comma-separated integers
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [15, 8, 23, 4, 42, 16, 9]
    )]
    pub values: Vec<i64>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Linear search for a target
    Linear {
        #[command(flatten)]
        values: Values,
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
    },
    /// Binary search (the values are sorted first)
    Binary {
        #[command(flatten)]
        values: Values,
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
    },
    /// Insert into an array by shifting
    Insert {
        #[command(flatten)]
        values: Values,
        #[arg(long)]
        index: usize,
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },
    /// Delete from an array by shifting
    Delete {
        #[command(flatten)]
        values: Values,
        #[arg(long)]
        index: usize,
    },
    /// Run a sorting algorithm
    Sort {
        #[arg(value_enum)]
        algorithm: SortArg,
        #[command(flatten)]
        values: Values,
    },
    /// Push onto a stack
    Push {
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        stack: Vec<i64>,
        #[arg(long)]
        capacity: Option<usize>,
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },
    /// Pop from a stack
    Pop {
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        stack: Vec<i64>,
    },
    /// Enqueue at the rear of a queue
    Enqueue {
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        queue: Vec<i64>,
        #[arg(long)]
        capacity: Option<usize>,
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },
    /// Dequeue from the front of a queue
    Dequeue {
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        queue: Vec<i64>,
    },
    /// Search a linked list
    ListSearch {
        #[arg(long, value_enum, default_value_t = ListArg::Singly)]
        kind: ListArg,
        #[command(flatten)]
        values: Values,
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
    },
    /// Insert a node into a linked list
    ListInsert {
        #[arg(long, value_enum, default_value_t = ListArg::Singly)]
        kind: ListArg,
        #[command(flatten)]
        values: Values,
        #[arg(long)]
        position: usize,
        #[arg(long, allow_negative_numbers = true)]
        value: i64,
    },
    /// Delete a node from a linked list
    ListDelete {
        #[arg(long, value_enum, default_value_t = ListArg::Singly)]
        kind: ListArg,
        #[command(flatten)]
        values: Values,
        #[arg(long)]
        position: usize,
    },
    /// Traverse a complete binary tree (1..=7 unless values are given)
    Tree {
        #[arg(value_enum)]
        order: OrderArg,
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values: Option<Vec<i64>>,
    },
    /// Traverse the seven-node demo graph
    Graph {
        #[arg(value_enum)]
        strategy: StrategyArg,
        #[arg(long, default_value_t = 0)]
        start: usize,
        /// Stop when this node is reached
        #[arg(long)]
        target: Option<usize>,
    },
    /// Find a character in a string
    StrSearch {
        #[arg(long)]
        text: String,
        #[arg(long)]
        ch: char,
    },
    /// Insert a character into a string
    StrInsert {
        #[arg(long)]
        text: String,
        #[arg(long)]
        index: usize,
        #[arg(long)]
        ch: char,
    },
    /// Delete a character from a string
    StrDelete {
        #[arg(long)]
        text: String,
        #[arg(long)]
        index: usize,
    },
    /// Naive substring search
    Match {
        #[arg(long)]
        text: String,
        #[arg(long)]
        pattern: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Counting,
    Radix,
    Heap,
}

impl From<SortArg> for SortAlgorithm {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Bubble => SortAlgorithm::Bubble,
            SortArg::Selection => SortAlgorithm::Selection,
            SortArg::Insertion => SortAlgorithm::Insertion,
            SortArg::Merge => SortAlgorithm::Merge,
            SortArg::Quick => SortAlgorithm::Quick,
            SortArg::Counting => SortAlgorithm::Counting,
            SortArg::Radix => SortAlgorithm::Radix,
            SortArg::Heap => SortAlgorithm::Heap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListArg {
    Singly,
    Doubly,
    Circular,
    DoublyCircular,
}

impl From<ListArg> for ListKind {
    fn from(arg: ListArg) -> Self {
        match arg {
            ListArg::Singly => ListKind::Singly,
            ListArg::Doubly => ListKind::Doubly,
            ListArg::Circular => ListKind::Circular,
            ListArg::DoublyCircular => ListKind::DoublyCircular,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Pre,
    In,
    Post,
}

impl From<OrderArg> for TraversalOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Pre => TraversalOrder::Pre,
            OrderArg::In => TraversalOrder::In,
            OrderArg::Post => TraversalOrder::Post,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Bfs,
    Dfs,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Bfs => Strategy::Bfs,
            StrategyArg::Dfs => Strategy::Dfs,
        }
    }
}

impl Commands {
    /// The operation this subcommand asks for
    pub fn into_operation(self) -> Operation {
        match self {
            Commands::Linear { values, target } => Operation::LinearSearch {
                values: values.values,
                target,
            },
            Commands::Binary { values, target } => {
                let mut values = values.values;
                values.sort_unstable();
                Operation::BinarySearch { values, target }
            }
            Commands::Insert {
                values,
                index,
                value,
            } => Operation::ArrayInsert {
                values: values.values,
                index,
                value,
            },
            Commands::Delete { values, index } => Operation::ArrayDelete {
                values: values.values,
                index,
            },
            Commands::Sort { algorithm, values } => Operation::Sort {
                algorithm: algorithm.into(),
                values: values.values,
            },
            Commands::Push {
                stack,
                capacity,
                value,
            } => Operation::StackPush {
                stack,
                capacity,
                value,
            },
            Commands::Pop { stack } => Operation::StackPop { stack },
            Commands::Enqueue {
                queue,
                capacity,
                value,
            } => Operation::QueueEnqueue {
                queue,
                capacity,
                value,
            },
            Commands::Dequeue { queue } => Operation::QueueDequeue { queue },
            Commands::ListSearch {
                kind,
                values,
                target,
            } => Operation::ListSearch {
                kind: kind.into(),
                list: values.values,
                target,
            },
            Commands::ListInsert {
                kind,
                values,
                position,
                value,
            } => Operation::ListInsert {
                kind: kind.into(),
                list: values.values,
                position,
                value,
            },
            Commands::ListDelete {
                kind,
                values,
                position,
            } => Operation::ListDelete {
                kind: kind.into(),
                list: values.values,
                position,
            },
            Commands::Tree { order, values } => Operation::TreeTraversal {
                tree: values.map_or_else(BinaryTree::sample, |v| BinaryTree::complete(&v)),
                order: order.into(),
            },
            Commands::Graph {
                strategy,
                start,
                target,
            } => Operation::GraphTraversal {
                graph: Graph::sample(),
                start,
                strategy: strategy.into(),
                target,
            },
            Commands::StrSearch { text, ch } => Operation::StringSearch { text, ch },
            Commands::StrInsert { text, index, ch } => Operation::StringInsert { text, index, ch },
            Commands::StrDelete { text, index } => Operation::StringDelete { text, index },
            Commands::Match { text, pattern } => Operation::PatternMatch { text, pattern },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_sort_subcommand() {
        let cli = parse(&["algoviz", "sort", "bubble", "--values", "3,1,2"]);
        assert_eq!(cli.delay_ms, 800);
        assert_eq!(
            cli.command.into_operation(),
            Operation::Sort {
                algorithm: SortAlgorithm::Bubble,
                values: vec![3, 1, 2],
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "algoviz",
            "enqueue",
            "--queue",
            "5,10,15",
            "--capacity",
            "3",
            "--value",
            "20",
            "--headless",
            "--delay-ms",
            "10",
        ]);
        assert!(cli.headless);
        assert_eq!(cli.delay_ms, 10);
        assert_eq!(
            cli.command.into_operation(),
            Operation::QueueEnqueue {
                queue: vec![5, 10, 15],
                capacity: Some(3),
                value: 20,
            }
        );
    }

    #[test]
    fn test_binary_sorts_values() {
        let cli = parse(&["algoviz", "binary", "--values", "9,-2,4", "--target", "4"]);
        assert_eq!(
            cli.command.into_operation(),
            Operation::BinarySearch {
                values: vec![-2, 4, 9],
                target: 4,
            }
        );
    }

    #[test]
    fn test_default_values_and_kinds() {
        let cli = parse(&["algoviz", "list-search", "--kind", "doubly-circular", "--target", "23"]);
        assert_eq!(
            cli.command.into_operation(),
            Operation::ListSearch {
                kind: ListKind::DoublyCircular,
                list: vec![15, 8, 23, 4, 42, 16, 9],
                target: 23,
            }
        );
    }
}
