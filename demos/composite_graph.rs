//! Builds a `Sequence(log("A"), Parallel(log("B"), log("C")), log("D"))`
//! graph directly (no configuration layer) and runs it once, printing the
//! order observed under a mutex-guarded log.

use std::sync::{Arc, Mutex};

use action_graph::action::SingleAction;
use action_graph::composite::{Parallel, Sequence};
use action_graph::Action;

fn logging_action(name: &'static str, log: Arc<Mutex<Vec<&'static str>>>) -> Box<dyn Action> {
    Box::new(SingleAction::new(name, move || {
        log.lock().unwrap().push(name);
        Ok(())
    }))
}

fn main() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let graph = Sequence::new(
        "root",
        vec![
            logging_action("A", Arc::clone(&log)),
            Box::new(Parallel::new(
                "fan",
                vec![
                    logging_action("B", Arc::clone(&log)),
                    logging_action("C", Arc::clone(&log)),
                ],
            )),
            logging_action("D", Arc::clone(&log)),
        ],
    );

    graph.execute().expect("graph execution should not fail");
    println!("order: {:?}", log.lock().unwrap());
}
