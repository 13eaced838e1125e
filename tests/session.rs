use binary_trees::session::{Response, Session};
use binary_trees::Error;

fn run(session: &mut Session<i64>, script: &str) -> Vec<String> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match session.execute(line) {
            Ok(response) => response.to_string(),
            Err(error) => format!("error: {}", error),
        })
        .collect()
}

#[test]
fn int_test_script() {
    let mut session = Session::new();
    let output = run(
        &mut session,
        "
        bst insert 50
        bst insert 30
        bst insert 70
        bst insert 20
        bst insert 40
        bst insert 40
        bst traverse in-order
        bst min
        bst max
        bst height
        bst search 40
        bst delete 30
        bst search 30
        bst balance
        ",
    );
    assert_eq!(
        output,
        vec![
            "inserted",
            "inserted",
            "inserted",
            "inserted",
            "inserted",
            "duplicate ignored",
            "[20, 30, 40, 50, 70]",
            "20",
            "70",
            "height: 2",
            "found: true",
            "root: 50",
            "found: false",
            "error: binary-search-tree does not support balance factor",
        ],
    );
}

#[test]
fn int_test_avl_script() {
    let mut session = Session::new();
    let output = run(
        &mut session,
        "
        avl insert 10
        avl insert 20
        avl insert 30
        avl traverse level
        avl balance
        avl visualize
        ",
    );
    assert_eq!(
        output,
        vec![
            "inserted",
            "inserted",
            "inserted",
            "[20, 10, 30]",
            "balance factor: 0",
            "├── 20\n│   ├── 10\n│   └── 30",
        ],
    );
}

#[test]
fn int_test_errors() {
    let mut session = Session::new();
    match session.execute("bt delete 1") {
        Err(Error::Unsupported { .. }) => {},
        other => panic!("expected an unsupported error, got {:?}", other),
    }
    match session.execute("bt insert") {
        Err(Error::Parse(_)) => {},
        other => panic!("expected a parse error, got {:?}", other),
    }
    assert_eq!(session.execute("bt visualize").unwrap(), Response::Empty);
}
