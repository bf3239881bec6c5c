// Error, ErrorKind, ResultExt and Result types for the library, generated by
// `error_chain!`. The binaries link their own error enums to this one.
use error_chain::*;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        GenerationFailed(attempts: usize) {
            description("maze generation failed")
            display("no solvable maze produced after {} generation attempts", attempts)
        }
    }
}
