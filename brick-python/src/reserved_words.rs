// Keywords, constants and built-ins of Python 2 and 3.
pub const RESERVED_WORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "exec", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "nonlocal", "not", "or", "pass", "print", "raise", "return", "try", "while",
    "with", "yield", "True", "False", "None", "NotImplemented", "Ellipsis", "__debug__", "quit",
    "exit", "copyright", "license", "credits", "abs", "divmod", "input", "open",
    "staticmethod", "all", "enumerate", "int", "ord", "str", "any", "eval", "isinstance", "pow",
    "sum", "basestring", "execfile", "issubclass", "super", "bin", "file", "iter", "property",
    "tuple", "bool", "filter", "len", "range", "type", "bytearray", "float", "list",
    "raw_input", "unichr", "callable", "format", "locals", "reduce", "unicode", "chr",
    "frozenset", "long", "reload", "vars", "classmethod", "getattr", "map", "repr", "xrange",
    "cmp", "globals", "max", "reversed", "zip", "compile", "hasattr", "memoryview", "round",
    "__import__", "complex", "hash", "min", "set", "apply", "delattr", "help", "next",
    "setattr", "buffer", "dict", "hex", "object", "slice", "coerce", "dir", "id", "oct",
    "sorted", "intern",
];
