#![cfg(test)]

mod util;

mod discovery {
    mod integration;
}

mod ports {
    mod integration;
}

mod logbook {
    mod integration;
}
