mod tests_final_parameters;
