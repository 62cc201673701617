use super::*;
use pretty_assertions::assert_eq;

fn name(n: u32) -> Name {
    Name::from_raw(n)
}

fn var(n: u32) -> Type {
    Type::Var(TypeVar::new(n))
}

#[test]
fn test_new_env_is_empty() {
    let env = TypeEnv::new();
    assert!(env.lookup(name(1)).is_none());
    assert!(env.is_empty());
    assert_eq!(env.len(), 0);
}

#[test]
fn test_bind_and_lookup() {
    let mut env = TypeEnv::new();
    env.bind(name(1), Type::Int);

    assert_eq!(env.lookup(name(1)), Some(&TypeScheme::mono(Type::Int)));
    assert!(env.lookup(name(2)).is_none());
    assert!(env.contains(name(1)));
}

#[test]
fn test_lookup_does_not_mutate() {
    let mut env = TypeEnv::new();
    let scheme = TypeScheme::poly(vec![TypeVar::new(0)], Type::function(var(0), var(0)));
    env.bind_scheme(name(1), scheme.clone());

    let _ = env.lookup(name(1));
    let _ = env.lookup(name(1));
    assert_eq!(env.lookup(name(1)), Some(&scheme));
}

#[test]
fn test_replace_and_restore_shadowed() {
    let mut env = TypeEnv::new();
    env.bind(name(1), Type::Int);

    let saved = env.replace(name(1), TypeScheme::mono(Type::Bool));
    assert_eq!(env.lookup(name(1)), Some(&TypeScheme::mono(Type::Bool)));

    env.restore(name(1), saved);
    assert_eq!(env.lookup(name(1)), Some(&TypeScheme::mono(Type::Int)));
}

#[test]
fn test_replace_and_restore_fresh_name() {
    let mut env = TypeEnv::new();

    let saved = env.replace(name(1), TypeScheme::mono(Type::Bool));
    assert!(saved.is_none());
    assert!(env.contains(name(1)));

    env.restore(name(1), saved);
    assert!(!env.contains(name(1)));
}

#[test]
fn test_remove() {
    let mut env = TypeEnv::new();
    env.bind(name(1), Type::Str);
    assert_eq!(env.remove(name(1)), Some(TypeScheme::mono(Type::Str)));
    assert_eq!(env.remove(name(1)), None);
}

#[test]
fn test_names_and_iter() {
    let env: TypeEnv = [
        (name(1), TypeScheme::mono(Type::Int)),
        (name(2), TypeScheme::mono(Type::Bool)),
    ]
    .into_iter()
    .collect();

    let mut names: Vec<Name> = env.names().collect();
    names.sort();
    assert_eq!(names, vec![name(1), name(2)]);
    assert_eq!(env.iter().count(), 2);
}

#[test]
fn test_free_vars_skip_quantified() {
    let mut env = TypeEnv::new();
    env.bind(name(1), var(3));
    env.bind_scheme(
        name(2),
        TypeScheme::poly(vec![TypeVar::new(0)], Type::function(var(0), var(4))),
    );

    let mut vars = env.free_vars();
    vars.sort();
    assert_eq!(vars, vec![TypeVar::new(3), TypeVar::new(4)]);
}

#[test]
fn test_generalize_closed_type() {
    let env = TypeEnv::new();
    let scheme = env.generalize(&Type::function(var(0), var(0)));
    assert_eq!(scheme.vars, vec![TypeVar::new(0)]);
}

#[test]
fn test_generalize_keeps_env_vars_free() {
    let mut env = TypeEnv::new();
    env.bind(name(1), var(0));

    let scheme = env.generalize(&Type::function(var(0), var(1)));
    assert_eq!(scheme.vars, vec![TypeVar::new(1)]);
    assert_eq!(scheme.free_vars(), vec![TypeVar::new(0)]);
}

#[test]
fn test_generalize_monomorphic() {
    let env = TypeEnv::new();
    let scheme = env.generalize(&Type::Int);
    assert!(scheme.is_mono());
}

#[test]
fn test_declarations_lookup() {
    let mut decls = TypeDeclarations::new();
    assert!(decls.is_empty());

    let string = name(10);
    let appending = name(11);
    decls.declare(
        string,
        appending,
        TypeScheme::mono(Type::function(Type::Str, Type::Str)),
    );

    assert!(decls.has_type(string));
    assert!(!decls.has_type(name(12)));
    assert_eq!(
        decls.lookup_member(string, appending),
        Some(&TypeScheme::mono(Type::function(Type::Str, Type::Str)))
    );
    assert!(decls.lookup_member(string, name(13)).is_none());
    assert!(decls.lookup_member(name(12), appending).is_none());
    assert_eq!(decls.members(string).map(TypeEnv::len), Some(1));
}

#[test]
fn test_declare_replaces_member() {
    let mut decls = TypeDeclarations::new();
    decls.declare(name(1), name(2), TypeScheme::mono(Type::Int));
    decls.declare(name(1), name(2), TypeScheme::mono(Type::Bool));
    assert_eq!(
        decls.lookup_member(name(1), name(2)),
        Some(&TypeScheme::mono(Type::Bool))
    );
}

#[test]
fn test_declarations_free_vars_skip_quantified() {
    let mut decls = TypeDeclarations::new();
    let a = TypeVar::new(0);
    let b = TypeVar::new(4);
    decls.declare(
        name(1),
        name(2),
        TypeScheme::poly(vec![a], Type::function(Type::Var(a), Type::Var(b))),
    );
    decls.declare(name(3), name(2), TypeScheme::mono(Type::Var(b)));

    assert_eq!(decls.free_vars(), vec![b]);
}
