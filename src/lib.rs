// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Integration tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod contact;
    pub mod ports;
}

pub mod adapters {
    pub mod in_memory;
    pub mod postgres;
}

pub mod use_cases {
    pub mod manage_contacts {
        pub mod http;
    }
    pub mod approximate_pi {
        pub mod engine;
        pub mod http;
    }
    pub mod service_info {
        pub mod http;
    }
}

pub mod shell;
