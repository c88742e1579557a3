//! Builds the reference tree, prints its traversals, deletes 50 and prints them again.
//!
//! Run with `RUST_LOG=debug` to hide the insertion trace.

use plain_bst::unbalanced::Tree;
use tracing_subscriber::EnvFilter;

fn print_traversals(tree: &Tree<i32>) {
    let render = |keys: Vec<String>| keys.join(" ");

    println!(
        "in order traversal: {}",
        render(tree.in_order_traversal().map(i32::to_string).collect())
    );
    println!(
        "pre order traversal: {}",
        render(tree.pre_order_traversal().map(i32::to_string).collect())
    );
    println!(
        "post order traversal: {}",
        render(tree.post_order_traversal().map(i32::to_string).collect())
    );
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut tree = Tree::new();
    // Root, then the right hand side, then the left hand side.
    for key in [25, 50, 70, 66, 90, 35, 31, 44, 15, 10, 4, 12, 22, 18, 24] {
        tree.insert(key);
    }
    print_traversals(&tree);

    tree.delete(&50);
    print_traversals(&tree);
}
