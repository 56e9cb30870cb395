mod tests_parser_java;
