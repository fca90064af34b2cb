//! CLI contract tests exercising the compiled binary against a mock
//! completion endpoint.

#[path = "../harness/mod.rs"]
mod harness;

mod generate {
    mod all_failed_exits_nonzero_contract;
    mod exports_bytes_verbatim_contract;
    mod generates_full_file_set_contract;
    mod partial_failure_keeps_siblings_contract;
    mod requires_api_key_contract;
    mod toggles_extend_file_set_contract;
}

mod refine {
    mod single_call_per_feedback_contract;
    mod write_flag_overwrites_file_contract;
}

mod services {
    mod lists_builtin_services_contract;
}
