#![forbid(unsafe_code)]

fn main() {
    // The set_GIT_* functions abort the build outside a git checkout, so
    // probe first and stamp placeholders when no git data is available.
    if build_data::get_git_branch().is_ok() {
        build_data::set_GIT_BRANCH();
        build_data::set_GIT_COMMIT_SHORT();
        build_data::set_GIT_DIRTY();
    } else {
        println!("cargo:rustc-env=GIT_BRANCH=unknown");
        println!("cargo:rustc-env=GIT_COMMIT_SHORT=unknown");
        println!("cargo:rustc-env=GIT_DIRTY=unknown");
    }
    build_data::set_RUSTC_VERSION();
}
